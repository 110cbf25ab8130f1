use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fatal configuration problems, raised before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid page type '{0}' (expected hot, new, rising, best, top[-span] or controversial[-span])")]
    InvalidPageType(String),
    #[error("max concurrent downloads must be at least 1")]
    ZeroConcurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSpan {
    Hour,
    Week,
    Month,
    Year,
    All,
}

impl TimeSpan {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeSpan::Hour => "hour",
            TimeSpan::Week => "week",
            TimeSpan::Month => "month",
            TimeSpan::Year => "year",
            TimeSpan::All => "all",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "hour" => Some(TimeSpan::Hour),
            "week" => Some(TimeSpan::Week),
            "month" => Some(TimeSpan::Month),
            "year" => Some(TimeSpan::Year),
            "all" => Some(TimeSpan::All),
            _ => None,
        }
    }
}

/// Listing sort order. Only `top` and `controversial` accept a time span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageType {
    #[default]
    Hot,
    New,
    Rising,
    Best,
    Top(Option<TimeSpan>),
    Controversial(Option<TimeSpan>),
}

impl PageType {
    /// Path component used in the listing URL (`top-week` -> `top`).
    pub fn path_segment(self) -> &'static str {
        match self {
            PageType::Hot => "hot",
            PageType::New => "new",
            PageType::Rising => "rising",
            PageType::Best => "best",
            PageType::Top(_) => "top",
            PageType::Controversial(_) => "controversial",
        }
    }

    pub fn time_span(self) -> Option<TimeSpan> {
        match self {
            PageType::Top(span) | PageType::Controversial(span) => span,
            _ => None,
        }
    }
}

impl FromStr for PageType {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidPageType(raw.to_string());
        let (base, span) = match raw.split_once('-') {
            Some((base, span)) => (base, Some(TimeSpan::parse(span).ok_or_else(invalid)?)),
            None => (raw, None),
        };
        match (base, span) {
            ("hot", None) => Ok(PageType::Hot),
            ("new", None) => Ok(PageType::New),
            ("rising", None) => Ok(PageType::Rising),
            ("best", None) => Ok(PageType::Best),
            ("top", span) => Ok(PageType::Top(span)),
            ("controversial", span) => Ok(PageType::Controversial(span)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time_span() {
            Some(span) => write!(f, "{}-{}", self.path_segment(), span.as_str()),
            None => f.write_str(self.path_segment()),
        }
    }
}
