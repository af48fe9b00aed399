//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::feed::{fixtures, FeaturedConnection, FeaturedContent, FeaturedStory, FeedKind};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Served connections; `None` makes the endpoint unavailable
    pub connections: Option<Arc<Vec<FeaturedConnection>>>,
    /// Served stories; `None` makes the endpoint unavailable
    pub stories: Option<Arc<Vec<FeaturedStory>>>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// State serving the built-in datasets
    pub fn new(config: ServerConfig) -> Self {
        Self::with_content(
            config,
            FeaturedContent {
                connections: fixtures::featured_connections(),
                stories: fixtures::featured_stories(),
            },
        )
    }

    /// State serving `content`
    pub fn with_content(config: ServerConfig, content: FeaturedContent) -> Self {
        Self {
            connections: Some(Arc::new(content.connections)),
            stories: Some(Arc::new(content.stories)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Take one feed offline, so its endpoint answers 503
    pub fn without_feed(mut self, kind: FeedKind) -> Self {
        match kind {
            FeedKind::Connections => self.connections = None,
            FeedKind::Stories => self.stories = None,
        }
        self
    }

    pub fn is_serving(&self, kind: FeedKind) -> bool {
        match kind {
            FeedKind::Connections => self.connections.is_some(),
            FeedKind::Stories => self.stories.is_some(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
