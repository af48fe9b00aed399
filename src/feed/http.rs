//! HTTP Feed Source
//!
//! `reqwest` client for the local featured endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::error::{FeedError, FeedResult};
use super::loader::FeedSource;
use super::records::FeedKind;

/// Reads featured lists from `{origin}/api/featured-*`
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
    origin: String,
}

impl HttpFeedSource {
    /// Create a source for `origin` (trailing slashes are ignored).
    ///
    /// No request timeout is configured: a hung request simply never
    /// resolves and its section stays empty.
    pub fn new(origin: impl Into<String>) -> FeedResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| FeedError::Client(e.to_string()))?;

        Ok(Self::with_client(client, origin))
    }

    /// Create a source over an existing client
    pub fn with_client(client: Client, origin: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { client, origin }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Full URL of a feed endpoint
    pub fn url(&self, kind: FeedKind) -> String {
        format!("{}{}", self.origin, kind.path())
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, kind: FeedKind) -> FeedResult<Value> {
        let url = self.url(kind);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))
    }
}
