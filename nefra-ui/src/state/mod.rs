//! State Management
//!
//! Global state plus the browser-side adapters for the core router, reveal
//! registry and settings store.

pub mod global;
pub mod history;
pub mod reveal;
pub mod storage;

pub use global::{provide_global_state, GlobalState};
pub use reveal::RevealController;
pub use storage::LocalStore;
