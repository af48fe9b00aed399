//! Featured Routes
//!
//! - GET /api/featured-connections
//! - GET /api/featured-stories

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::feed::{FeaturedConnection, FeaturedStory};

/// GET /api/featured-connections
pub async fn featured_connections(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FeaturedConnection>>> {
    let connections = state
        .connections
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("featured connections offline".into()))?;

    tracing::debug!(count = connections.len(), "Serving featured connections");
    Ok(Json(connections.as_ref().clone()))
}

/// GET /api/featured-stories
pub async fn featured_stories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FeaturedStory>>> {
    let stories = state
        .stories
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("featured stories offline".into()))?;

    tracing::debug!(count = stories.len(), "Serving featured stories");
    Ok(Json(stories.as_ref().clone()))
}
