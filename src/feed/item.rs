//! Feed item representation.

/// One `<item>` of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// URL of the downloadable resource.
    pub link: String,
}

impl FeedItem {
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }
}
