use grab_core::{image_id_from_link, is_image_candidate, Author, Image};
use serde::Deserialize;

/// Listing payload as served by the feed host. Every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub data: Option<ListingData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub dist: Option<i64>,
    #[serde(default)]
    pub children: Vec<Child>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Child {
    #[serde(default)]
    pub data: Option<ChildData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChildData {
    pub title: Option<String>,
    pub domain: Option<String>,
    pub id: Option<String>,
    pub author: Option<String>,
    pub permalink: Option<String>,
    pub post_hint: Option<String>,
    pub url: Option<String>,
    pub subreddit: Option<String>,
}

/// Parses raw listing bytes. An empty body is an empty listing.
pub fn parse_listing(bytes: &[u8]) -> Result<Listing, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Listing::default());
    }
    serde_json::from_slice(bytes)
}

impl Listing {
    /// Direct-image candidates in listing order. Entries without a link or
    /// whose derived image id is blank are dropped here; per-feed duplicates
    /// are left for the caller.
    pub fn candidates(&self) -> Vec<Image> {
        let Some(data) = &self.data else {
            return Vec::new();
        };
        data.children
            .iter()
            .filter_map(|child| child.data.as_ref())
            .filter_map(ChildData::to_image)
            .collect()
    }

    pub fn after(&self) -> Option<&str> {
        self.data.as_ref().and_then(|data| data.after.as_deref())
    }
}

impl ChildData {
    fn to_image(&self) -> Option<Image> {
        let link = self.url.as_deref()?;
        if !is_image_candidate(self.domain.as_deref(), self.post_hint.as_deref(), link) {
            return None;
        }
        let image_id = image_id_from_link(link);
        if image_id.trim().is_empty() {
            return None;
        }
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        Some(Image {
            id: text(&self.id),
            image_id,
            link: link.to_string(),
            rewritten_link: None,
            feed: text(&self.subreddit),
            author: Author::new(text(&self.author)),
            title: text(&self.title),
            post_link: text(&self.permalink),
            source: text(&self.domain),
        })
    }
}
