//! Browser History
//!
//! `window.history` behind the core [`History`] trait.

use leptos::*;
use nefra_connect::routing::{History, Router};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `window.history` + `window.location`
pub struct BrowserHistory {
    history: Option<web_sys::History>,
}

impl BrowserHistory {
    pub fn new() -> Self {
        let history = web_sys::window().and_then(|w| w.history().ok());
        Self { history }
    }
}

impl Default for BrowserHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&mut self, path: &str) {
        if let Some(history) = &self.history {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                web_sys::console::error_1(&format!("pushState failed: {:?}", e).into());
            }
        }
    }

    fn len(&self) -> usize {
        self.history
            .as_ref()
            .and_then(|h| h.length().ok())
            .unwrap_or(1) as usize
    }
}

/// Shared router handle for event handlers
pub type SharedRouter = Rc<RefCell<Router<BrowserHistory>>>;

/// Mirror router changes into `path` and keep the router in sync with
/// back/forward navigation.
pub fn connect_router(router: &SharedRouter, path: RwSignal<String>) {
    let mut changes = router.borrow().subscribe();
    spawn_local(async move {
        while changes.changed().await.is_ok() {
            let current = changes.borrow_and_update().clone();
            path.set(current);
        }
    });

    let router = Rc::clone(router);
    let on_pop = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev| {
        router.borrow_mut().handle_pop();
    });

    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window
                .add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())
            {
                web_sys::console::error_1(&format!("popstate listener failed: {:?}", e).into());
            }
        }
        None => web_sys::console::error_1(&"No window; back/forward disabled".into()),
    }

    // Lives for the whole app
    on_pop.forget();
}
