//! HTTP Feed Client
//!
//! `gloo-net` implementation of the core [`FeedSource`].

use async_trait::async_trait;
use gloo_net::http::Request;
use nefra_connect::feed::{FeedError, FeedKind, FeedResult, FeedSource, DEFAULT_FEED_ORIGIN};
use serde_json::Value;

/// localStorage key overriding the feed origin
const ORIGIN_KEY: &str = "nefra_feed_origin";

/// Get the feed origin from local storage or use default
pub fn get_feed_origin() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(ORIGIN_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_FEED_ORIGIN.to_string());
    origin.trim_end_matches('/').to_string()
}

/// Set the feed origin in local storage
pub fn set_feed_origin(origin: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(ORIGIN_KEY, origin);
        }
    }
}

/// Reads `{origin}/api/featured-*` with `fetch`
pub struct BrowserFeedSource {
    origin: String,
}

impl BrowserFeedSource {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    /// Source for the configured origin
    pub fn from_storage() -> Self {
        Self::new(get_feed_origin())
    }
}

#[async_trait(?Send)]
impl FeedSource for BrowserFeedSource {
    async fn fetch(&self, kind: FeedKind) -> FeedResult<Value> {
        let url = format!("{}{}", self.origin, kind.path());

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FeedError::Status {
                url,
                status: response.status(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))
    }
}
