//! # NEFRA Connect
//!
//! Front-end core for NEFRA Connections, a campus-alumni networking site:
//! client-side routing, one-shot scroll reveals, best-effort featured feeds,
//! locally persisted user settings and placeholder account forms.
//!
//! ## Modules
//!
//! - [`routing`]: Path router over an injectable history
//! - [`reveal`]: Reveal registry, viewport geometry and settle scheduler
//! - [`feed`]: Featured connection/story records and the concurrent loader
//! - [`settings`]: User settings model and key-value persistence
//! - [`forms`]: Sign-up and sign-in forms
//! - [`pages`]: Per-page view models and static page data
//! - [`api`]: Local dev server for the featured feeds (native only)
//! - [`config`]: TOML + environment configuration (native only)
//!
//! Everything except `api`, `config`, `logging` and the reveal scheduler
//! builds for `wasm32-unknown-unknown` with default features off, which is
//! how the browser crate uses it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nefra_connect::feed::{load_featured, HttpFeedSource};
//! use nefra_connect::pages::HomeView;
//! use nefra_connect::routing::Router;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut router = Router::in_memory("/");
//!     router.navigate("/search");
//!
//!     let source = HttpFeedSource::new("http://localhost:5000")?;
//!     let content = load_featured(&source).await;
//!     let view = HomeView::build(&content);
//!
//!     println!("{} stories on {}", view.stories.len(), router.current_path());
//!     Ok(())
//! }
//! ```

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod config;
pub mod feed;
pub mod forms;
#[cfg(feature = "native")]
pub mod logging;
pub mod pages;
pub mod reveal;
pub mod routing;
pub mod settings;

pub use feed::{
    load_featured, FeaturedConnection, FeaturedContent, FeaturedStory, FeedError, FeedKind,
    FeedSource,
};
pub use forms::{FormError, SignInForm, SignUpForm};
pub use pages::{HomeView, Page};
pub use reveal::{RevealConfig, RevealId, RevealRegistry, RevealState};
pub use routing::{History, MemoryHistory, Route, Router};
pub use settings::{KeyValueStore, SettingsError, SettingsRepository, UserSettings};

#[cfg(feature = "native")]
pub use api::{build_router, serve, ApiError, AppState};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
