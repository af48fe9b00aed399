//! Route Table
//!
//! The fixed set of top-level paths the app knows about.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A known top-level route
///
/// Matching is exact string equality. Anything unrecognized resolves to
/// [`Route::Home`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    Search,
    Company,
    Profile,
    SignIn,
    SignUp,
    Settings,
}

impl Route {
    /// Every route, in navigation order
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Search,
        Route::Company,
        Route::Profile,
        Route::SignIn,
        Route::SignUp,
        Route::Settings,
    ];

    /// Resolve a raw path.
    ///
    /// No trimming, no query strings, no parameters: `/search?q=x` and
    /// `/search/` are both unknown and fall through to Home.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/search" => Route::Search,
            "/company" => Route::Company,
            "/profile" => Route::Profile,
            "/signin" => Route::SignIn,
            "/signup" => Route::SignUp,
            "/settings" => Route::Settings,
            _ => Route::Home,
        }
    }

    /// Canonical path for this route
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Search => "/search",
            Route::Company => "/company",
            Route::Profile => "/profile",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::Settings => "/settings",
        }
    }

    /// Whether `path` is one of the known paths (exactly)
    pub fn is_known(path: &str) -> bool {
        Route::ALL.iter().any(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
            assert!(Route::is_known(route.path()));
        }
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        for path in ["", "/nope", "/search/", "/Search", "/search?q=x", "/company/42"] {
            assert_eq!(Route::from_path(path), Route::Home, "path {:?}", path);
        }
        assert!(!Route::is_known("/search/"));
        assert_eq!(Route::default(), Route::Home);
    }
}
