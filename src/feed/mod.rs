//! Feed module.
//!
//! Provides:
//! - Fetching the RSS document
//! - Extracting item links from it

pub mod fetch;
pub mod item;
pub mod parser;

pub use fetch::fetch_feed;
pub use item::FeedItem;
pub use parser::parse_feed;
