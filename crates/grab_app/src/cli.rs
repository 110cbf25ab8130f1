use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use grab_core::PageType;
use grab_engine::{ScrapeConfig, DEFAULT_LIMIT, DEFAULT_MAX_CONCURRENT};

use crate::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "grab", version, about = "Download direct images from subreddit feeds")]
pub struct Cli {
    #[arg(short, long, default_value = "images", value_name = "DIR")]
    pub output: PathBuf,

    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LIMIT,
        help = "Items to request per feed (0 uses the default, capped at 100)"
    )]
    pub limit: u32,

    #[arg(short, long, help = "Also download from the front page")]
    pub frontpage: bool,

    #[arg(
        short,
        long,
        default_value = "hot",
        help = "hot, new, rising, best, top[-span] or controversial[-span]"
    )]
    pub page_type: PageType,

    #[arg(short, long, value_delimiter = ',', value_name = "NAME")]
    pub subreddits: Vec<String>,

    #[arg(short = 'c', long, default_value_t = DEFAULT_MAX_CONCURRENT)]
    pub max_concurrent: usize,

    #[arg(short, long, help = "Write every image into the output directory itself")]
    pub root_folder_only: bool,

    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
    Off,
}

impl LogTarget {
    pub fn destination(self) -> Option<LogDestination> {
        match self {
            LogTarget::File => Some(LogDestination::File),
            LogTarget::Terminal => Some(LogDestination::Terminal),
            LogTarget::Both => Some(LogDestination::Both),
            LogTarget::Off => None,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> ScrapeConfig {
        let mut config = ScrapeConfig::default_with_output(self.output);
        config.feeds = self.subreddits;
        config.front_page = self.frontpage;
        config.page_type = self.page_type;
        config.limit = self.limit;
        config.root_folder_only = self.root_folder_only;
        config.max_concurrent_downloads = self.max_concurrent;
        config
    }
}
