//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::feed::FeedKind;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Ready while at least one feed is served.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.is_serving(FeedKind::Connections) || state.is_serving(FeedKind::Stories) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let connections_ok = state.is_serving(FeedKind::Connections);
    let stories_ok = state.is_serving(FeedKind::Stories);

    let status = if connections_ok && stories_ok {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        connections: feed_status(connections_ok).to_string(),
        stories: feed_status(stories_ok).to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn feed_status(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "offline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
