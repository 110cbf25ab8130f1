use std::path::PathBuf;

use grab_core::{ConfigError, PageType, FRONTPAGE};
use grab_logging::grab_warn;

pub const DEFAULT_LIMIT: u32 = 50;
/// Largest page the listing host serves in one request.
pub const MAX_LIMIT: u32 = 100;
pub const DEFAULT_MAX_CONCURRENT: usize = 10;
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Scheme and host listings are requested from.
    pub listing_host: String,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            listing_host: "https://www.reddit.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub output_dir: PathBuf,
    pub feeds: Vec<String>,
    pub front_page: bool,
    pub page_type: PageType,
    /// Requested items per feed; see [`ScrapeConfig::effective_limit`].
    pub limit: u32,
    pub root_folder_only: bool,
    pub max_concurrent_downloads: usize,
    pub queue_capacity: usize,
    pub fetch: FetchSettings,
}

impl ScrapeConfig {
    pub fn default_with_output(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            feeds: Vec::new(),
            front_page: false,
            page_type: PageType::default(),
            limit: DEFAULT_LIMIT,
            root_folder_only: false,
            max_concurrent_downloads: DEFAULT_MAX_CONCURRENT,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            fetch: FetchSettings::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_downloads == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }

    /// Zero falls back to the default; anything above the page maximum is clamped.
    pub fn effective_limit(&self) -> u32 {
        match self.limit {
            0 => DEFAULT_LIMIT,
            limit if limit > MAX_LIMIT => {
                grab_warn!("limit {} exceeds the maximum of {}, clamping", limit, MAX_LIMIT);
                MAX_LIMIT
            }
            limit => limit,
        }
    }

    /// Directory a feed's images are written to.
    pub fn feed_dir(&self, feed: &str) -> PathBuf {
        if self.root_folder_only {
            self.output_dir.clone()
        } else {
            self.output_dir.join(feed)
        }
    }

    /// Feed names to serve, one fetcher each: trimmed, blanks dropped,
    /// `frontpage` appended when requested, duplicates removed in first-seen order.
    pub fn resolved_feeds(&self) -> Vec<String> {
        let requested = self
            .feeds
            .iter()
            .map(|feed| feed.trim().to_string())
            .chain(self.front_page.then(|| FRONTPAGE.to_string()));

        let mut resolved: Vec<String> = Vec::new();
        for feed in requested {
            if feed.is_empty() {
                grab_warn!("ignoring blank feed name");
                continue;
            }
            if !resolved.contains(&feed) {
                resolved.push(feed);
            }
        }
        resolved
    }
}
