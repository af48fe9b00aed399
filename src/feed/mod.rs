//! Featured Feeds
//!
//! The two optional homepage lists: featured connections and success
//! stories. Records are validated once at the boundary ([`records`]) and
//! loaded best-effort ([`load_featured`]).
//!
//! ## Data Flow
//!
//! 1. [`FeedSource::fetch`] pulls a raw JSON body per list
//! 2. [`parse_list`] validates it into typed records, dropping bad items
//! 3. Any failure leaves that list empty and logs a warning

mod error;
pub mod fixtures;
#[cfg(feature = "native")]
mod http;
mod loader;
pub mod records;

pub use error::{FeedError, FeedResult};
#[cfg(feature = "native")]
pub use http::HttpFeedSource;
pub use loader::{load_featured, load_list, FeedSource};
pub use records::{
    parse_list, FeaturedConnection, FeaturedContent, FeaturedStory, FeedKind, FeedRecord,
};

/// Default origin of the local feed API
pub const DEFAULT_FEED_ORIGIN: &str = "http://localhost:5000";
