//! Dev server + HTTP loader + home view, end to end.

use nefra_connect::api::{build_router, AppState};
use nefra_connect::config::ServerConfig;
use nefra_connect::feed::{load_featured, FeedKind, HttpFeedSource};
use nefra_connect::pages::HomeView;

/// Serve `state` on an ephemeral port and return its origin
async fn spawn_server(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_home_view_from_dev_server() {
    let origin = spawn_server(AppState::new(ServerConfig::default())).await;
    let source = HttpFeedSource::new(origin).unwrap();

    let content = load_featured(&source).await;
    assert_eq!(content.connections.len(), 3);
    assert_eq!(content.stories.len(), 3);

    let view = HomeView::build(&content);
    assert!(view.hero.is_some());
    assert_eq!(view.feature.unwrap().name, "Arjun Mehta");
    assert_eq!(view.sidebar.len(), 2);
    assert_eq!(view.stories[2].story.title, "Global Mentorship");
}

#[tokio::test]
async fn test_one_feed_down_leaves_the_other() {
    let state = AppState::new(ServerConfig::default()).without_feed(FeedKind::Connections);
    let origin = spawn_server(state).await;
    let source = HttpFeedSource::new(origin).unwrap();

    let view = HomeView::build(&load_featured(&source).await);
    assert!(view.hero.is_none());
    assert!(!view.has_matches());
    assert_eq!(view.stories.len(), 3);
}

#[tokio::test]
async fn test_both_feeds_down_still_renders() {
    let state = AppState::new(ServerConfig::default())
        .without_feed(FeedKind::Connections)
        .without_feed(FeedKind::Stories);
    let origin = spawn_server(state).await;
    let source = HttpFeedSource::new(origin).unwrap();

    let content = load_featured(&source).await;
    assert!(content.is_empty());
    assert_eq!(HomeView::build(&content), HomeView::build(&Default::default()));
}

#[tokio::test]
async fn test_unreachable_origin_gives_empty_home() {
    let source = HttpFeedSource::new("http://127.0.0.1:1").unwrap();
    let view = HomeView::build(&load_featured(&source).await);
    assert!(view.hero.is_none());
    assert!(view.stories.is_empty());
}
