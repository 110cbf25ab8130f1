use std::collections::HashSet;

/// Image ids already scheduled for one feed.
///
/// Insertion-only: there is no way to remove an id once recorded. A set is
/// created and owned by the single task serving its feed, so `insert` takes
/// `&mut self` and needs no locking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DedupSet {
    feed: String,
    ids: HashSet<String>,
}

impl DedupSet {
    pub fn new(feed: impl Into<String>) -> Self {
        Self {
            feed: feed.into(),
            ids: HashSet::new(),
        }
    }

    /// Records `image_id`, returning `false` for blank or already seen ids.
    pub fn insert(&mut self, image_id: &str) -> bool {
        let trimmed = image_id.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.ids.insert(trimmed.to_string())
    }

    pub fn contains(&self, image_id: &str) -> bool {
        self.ids.contains(image_id.trim())
    }

    pub fn feed(&self) -> &str {
        &self.feed
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
