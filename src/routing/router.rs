//! Path Router
//!
//! Single source of truth for the current logical page. The current path
//! lives in the injected [`History`]; the router mirrors it into a `watch`
//! channel so any number of views can observe changes.

use tokio::sync::watch;

use super::history::{History, MemoryHistory};
use super::route::Route;

/// Observable path router over a [`History`]
#[derive(Debug)]
pub struct Router<H: History> {
    history: H,
    current: watch::Sender<String>,
}

impl<H: History> Router<H> {
    /// Create a router starting at the history's current entry
    pub fn new(history: H) -> Self {
        let (current, _) = watch::channel(history.current_path());
        Self { history, current }
    }

    /// Current path string
    pub fn current_path(&self) -> String {
        self.history.current_path()
    }

    /// Route the current path resolves to
    pub fn current_route(&self) -> Route {
        Route::from_path(&self.history.current_path())
    }

    /// Observe path changes.
    ///
    /// The receiver starts marked as seen; it reports a change only after
    /// the next effective navigation.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.current.subscribe()
    }

    /// Navigate to `path`.
    ///
    /// Returns false and does nothing when `path` is already current: no
    /// history entry is pushed and subscribers are not notified.
    pub fn navigate(&mut self, path: &str) -> bool {
        let from = self.history.current_path();
        if from == path {
            tracing::trace!(path = %path, "navigation to current path ignored");
            return false;
        }

        self.history.push(path);
        self.current.send_replace(path.to_string());

        tracing::debug!(from = %from, to = %path, "navigated");
        true
    }

    /// Navigate to a known route
    pub fn navigate_to(&mut self, route: Route) -> bool {
        self.navigate(route.path())
    }

    /// Re-read the history after a back/forward action.
    ///
    /// Returns true when the observed path changed.
    pub fn handle_pop(&mut self) -> bool {
        let path = self.history.current_path();
        let changed = self.current.send_if_modified(|current| {
            if *current == path {
                false
            } else {
                *current = path.clone();
                true
            }
        });

        if changed {
            tracing::debug!(to = %path, "history pop");
        }
        changed
    }

    /// Borrow the underlying history
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutably borrow the underlying history.
    ///
    /// Callers that move the cursor directly must follow up with
    /// [`Router::handle_pop`].
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}

impl Router<MemoryHistory> {
    /// Router over a fresh in-memory history at `initial`
    pub fn in_memory(initial: impl Into<String>) -> Self {
        Self::new(MemoryHistory::new(initial))
    }

    /// Browser-style back button
    pub fn back(&mut self) -> bool {
        self.history.back() && self.handle_pop()
    }

    /// Browser-style forward button
    pub fn forward(&mut self) -> bool {
        self.history.forward() && self.handle_pop()
    }
}

impl Default for Router<MemoryHistory> {
    fn default() -> Self {
        Self::new(MemoryHistory::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_to_current_path_is_noop() {
        let mut router = Router::in_memory("/search");
        let mut rx = router.subscribe();
        rx.borrow_and_update();

        assert!(!router.navigate("/search"));
        assert_eq!(router.history().len(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_navigate_pushes_and_notifies() {
        let mut router = Router::default();
        let mut rx = router.subscribe();

        assert!(router.navigate("/company"));
        assert_eq!(router.history().len(), 2);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "/company");
        assert_eq!(router.current_route(), Route::Company);
    }

    #[test]
    fn test_repeated_navigation_does_not_grow_history() {
        let mut router = Router::default();
        router.navigate_to(Route::Settings);
        router.navigate_to(Route::Settings);
        router.navigate_to(Route::Settings);
        assert_eq!(router.history().entries(), ["/", "/settings"]);
    }

    #[test]
    fn test_back_forward_update_observers() {
        let mut router = Router::default();
        router.navigate("/search");
        router.navigate("/profile");

        let mut rx = router.subscribe();
        rx.borrow_and_update();

        assert!(router.back());
        assert_eq!(*rx.borrow_and_update(), "/search");
        assert_eq!(router.current_route(), Route::Search);

        assert!(router.forward());
        assert_eq!(*rx.borrow_and_update(), "/profile");

        assert!(!router.forward());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_unknown_path_resolves_home() {
        let mut router = Router::default();
        assert!(router.navigate("/does-not-exist"));
        assert_eq!(router.current_path(), "/does-not-exist");
        assert_eq!(router.current_route(), Route::Home);
    }
}
