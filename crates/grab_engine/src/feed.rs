use grab_core::{PageType, FRONTPAGE};
use url::Url;

use crate::{FailureKind, FetchError};

/// A feed name with the listing parameters resolved for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub name: String,
    pub page_type: PageType,
    pub limit: u32,
    /// Pagination cursor; empty on the first page.
    pub after: String,
}

impl Feed {
    pub fn new(name: impl Into<String>, page_type: PageType, limit: u32) -> Self {
        Self {
            name: name.into(),
            page_type,
            limit,
            after: String::new(),
        }
    }

    pub fn is_frontpage(&self) -> bool {
        self.name == FRONTPAGE
    }

    /// `<host>[/r/<feed>]/<page>.json?limit=<n>&after=<cursor>[&t=<span>]`
    pub fn listing_url(&self, host: &str) -> Result<Url, FetchError> {
        let host = host.trim_end_matches('/');
        let page = self.page_type.path_segment();
        let raw = if self.is_frontpage() {
            format!("{host}/{page}.json")
        } else {
            format!("{host}/r/{}/{page}.json", self.name)
        };
        let mut url = Url::parse(&raw)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &self.limit.to_string());
            query.append_pair("after", &self.after);
            if let Some(span) = self.page_type.time_span() {
                query.append_pair("t", span.as_str());
            }
        }
        Ok(url)
    }
}
