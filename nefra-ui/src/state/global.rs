//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use nefra_connect::feed::FeaturedContent;
use nefra_connect::reveal::RevealConfig;
use nefra_connect::routing::Router;
use std::cell::RefCell;
use std::rc::Rc;

use super::history::{connect_router, BrowserHistory, SharedRouter};
use super::reveal::RevealController;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current location, mirrored from the router
    pub path: RwSignal<String>,
    /// Router over `window.history`
    pub router: SharedRouter,
    /// Featured lists; empty until loaded or on failure
    pub content: RwSignal<FeaturedContent>,
    /// Featured lists still in flight
    pub loading: RwSignal<bool>,
    /// Scroll reveal driver
    pub reveal: RevealController,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let router = Rc::new(RefCell::new(Router::new(BrowserHistory::new())));
    let path = create_rw_signal(router.borrow().current_path());
    connect_router(&router, path);

    let state = GlobalState {
        path,
        router,
        content: create_rw_signal(FeaturedContent::default()),
        loading: create_rw_signal(false),
        reveal: RevealController::new(RevealConfig::default()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Client-side navigation; no-op when already at `path`
    pub fn navigate(&self, path: &str) {
        self.router.borrow_mut().navigate(path);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
