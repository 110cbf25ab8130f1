use std::fmt;
use std::io;
use std::path::PathBuf;

use grab_core::{ConfigError, DedupSet, ProgressTotals};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Network,
    /// The body arrived but could not be written to the destination.
    Write,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Write => write!(f, "write error"),
        }
    }
}

/// Everything that can go wrong in a run. Only `Config` ends a run; the rest
/// are recovered at feed or item scope.
#[derive(Debug, Error)]
pub enum GrabError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("network: {0}")]
    Network(#[from] FetchError),
    #[error("malformed listing: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("filesystem error at {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GrabError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GrabError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// What one metadata fetcher produced for its feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedReport {
    pub feed: String,
    pub scheduled: usize,
    /// The feed's ids, handed back by the only task that wrote them.
    pub seen: DedupSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub totals: ProgressTotals,
    pub feeds: Vec<FeedReport>,
}

impl RunSummary {
    pub fn feed(&self, name: &str) -> Option<&FeedReport> {
        self.feeds.iter().find(|report| report.feed == name)
    }
}
