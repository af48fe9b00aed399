//! Featured Feed Loader
//!
//! Best-effort load of both featured lists. The two reads run concurrently
//! and are fully independent: either one may fail without affecting the
//! other. A failed list is logged and comes back empty. No retry, no cache,
//! no timeout.

use async_trait::async_trait;
use serde_json::Value;

use super::error::FeedResult;
use super::records::{
    parse_list, FeaturedConnection, FeaturedContent, FeaturedStory, FeedKind, FeedRecord,
};

/// Something that can produce the raw JSON body of a feed
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FeedSource {
    /// Fetch one feed body. Any transport or status failure is an error.
    async fn fetch(&self, kind: FeedKind) -> FeedResult<Value>;
}

/// Load both featured lists concurrently
pub async fn load_featured<S>(source: &S) -> FeaturedContent
where
    S: FeedSource + ?Sized,
{
    let (connections, stories) = futures_util::future::join(
        load_list::<FeaturedConnection, S>(source),
        load_list::<FeaturedStory, S>(source),
    )
    .await;

    FeaturedContent {
        connections,
        stories,
    }
}

/// Load one list, degrading to empty on any failure
pub async fn load_list<T, S>(source: &S) -> Vec<T>
where
    T: FeedRecord,
    S: FeedSource + ?Sized,
{
    let result = match source.fetch(T::KIND).await {
        Ok(body) => parse_list::<T>(&body),
        Err(e) => Err(e),
    };

    match result {
        Ok(records) => {
            tracing::debug!(feed = %T::KIND, count = records.len(), "featured feed loaded");
            records
        }
        Err(e) => {
            tracing::warn!(
                feed = %T::KIND,
                error = %e,
                "featured feed unavailable, section left empty"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedError;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned responses; a missing entry is a network failure
    #[derive(Default)]
    struct CannedSource {
        bodies: HashMap<FeedKind, Value>,
        calls: Mutex<Vec<FeedKind>>,
    }

    impl CannedSource {
        fn with(mut self, kind: FeedKind, body: Value) -> Self {
            self.bodies.insert(kind, body);
            self
        }
    }

    #[async_trait]
    impl FeedSource for CannedSource {
        async fn fetch(&self, kind: FeedKind) -> FeedResult<Value> {
            self.calls.lock().unwrap().push(kind);
            self.bodies
                .get(&kind)
                .cloned()
                .ok_or_else(|| FeedError::Network("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_both_lists_loaded() {
        let source = CannedSource::default()
            .with(FeedKind::Connections, json!([{ "name": "A" }, { "name": "B" }]))
            .with(FeedKind::Stories, json!([{ "title": "Won" }]));

        let content = load_featured(&source).await;
        assert_eq!(content.connections.len(), 2);
        assert_eq!(content.stories.len(), 1);

        let mut calls = source.calls.lock().unwrap().clone();
        calls.sort_by_key(|k| k.path());
        assert_eq!(calls, vec![FeedKind::Connections, FeedKind::Stories]);
    }

    #[tokio::test]
    async fn test_failures_are_independent() {
        let source =
            CannedSource::default().with(FeedKind::Stories, json!([{ "title": "Seed Funded" }]));

        let content = load_featured(&source).await;
        assert!(content.connections.is_empty());
        assert_eq!(content.stories[0].title, "Seed Funded");
    }

    #[tokio::test]
    async fn test_total_failure_is_empty_content() {
        let content = load_featured(&CannedSource::default()).await;
        assert!(content.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_degrades_to_empty() {
        let source = CannedSource::default()
            .with(FeedKind::Connections, json!({ "error": "nope" }))
            .with(FeedKind::Stories, json!("not a list"));

        assert!(load_featured(&source).await.is_empty());
    }
}
