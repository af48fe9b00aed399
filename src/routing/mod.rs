//! Client-Side Routing
//!
//! Minimal path router: a fixed route table, a pluggable history stack and
//! an observable current path.
//!
//! # Example
//!
//! ```rust
//! use nefra_connect::routing::{Route, Router};
//!
//! let mut router = Router::in_memory("/");
//! let rx = router.subscribe();
//!
//! assert!(router.navigate("/search"));
//! assert!(!router.navigate("/search")); // already there
//! assert_eq!(*rx.borrow(), "/search");
//! assert_eq!(router.current_route(), Route::Search);
//! ```

mod history;
mod route;
mod router;

pub use history::{History, MemoryHistory};
pub use route::Route;
pub use router::Router;
