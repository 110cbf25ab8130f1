use std::path::PathBuf;

use grab_core::ConfigError;
use grab_engine::{ScrapeConfig, DEFAULT_LIMIT, MAX_LIMIT};

#[test]
fn limit_is_defaulted_and_clamped() {
    let mut config = ScrapeConfig::default_with_output("out");
    config.limit = 0;
    assert_eq!(config.effective_limit(), DEFAULT_LIMIT);
    config.limit = 500;
    assert_eq!(config.effective_limit(), MAX_LIMIT);
    config.limit = 7;
    assert_eq!(config.effective_limit(), 7);
}

#[test]
fn feed_dir_respects_root_folder_only() {
    let mut config = ScrapeConfig::default_with_output("out");
    assert_eq!(config.feed_dir("pics"), PathBuf::from("out").join("pics"));
    config.root_folder_only = true;
    assert_eq!(config.feed_dir("pics"), PathBuf::from("out"));
}

#[test]
fn feeds_are_trimmed_deduplicated_and_frontpage_appended() {
    let mut config = ScrapeConfig::default_with_output("out");
    config.feeds = vec![
        " pics ".to_string(),
        "".to_string(),
        "aww".to_string(),
        "pics".to_string(),
    ];
    config.front_page = true;

    assert_eq!(config.resolved_feeds(), vec!["pics", "aww", "frontpage"]);
}

#[test]
fn zero_concurrency_is_rejected() {
    let mut config = ScrapeConfig::default_with_output("out");
    config.max_concurrent_downloads = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroConcurrency));
}
