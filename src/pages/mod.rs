//! Page Models
//!
//! Render-independent view models for each top-level page. The browser
//! crate turns these into DOM; the CLI prints them.

pub mod company;
mod home;
pub mod profile;
pub mod search;

pub use home::{HeroCards, HomeView, StoryTile, SIDEBAR_DELAY, STORY_STAGGER};
pub use search::{DirectoryEntry, IndustryChip, RoleChip, SearchFilter};

use serde::Serialize;

use crate::routing::Route;

/// Top-level view for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Search,
    Company,
    Profile,
    SignIn,
    SignUp,
    Settings,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Search => "Find Your Next Connection",
            Page::Company => "Company",
            Page::Profile => "Profile",
            Page::SignIn => "Sign In",
            Page::SignUp => "Create Account",
            Page::Settings => "Settings",
        }
    }
}

impl From<Route> for Page {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::Search => Page::Search,
            Route::Company => Page::Company,
            Route::Profile => Page::Profile,
            Route::SignIn => Page::SignIn,
            Route::SignUp => Page::SignUp,
            Route::Settings => Page::Settings,
        }
    }
}

/// Resolve a raw path straight to its page
pub fn page_for(path: &str) -> Page {
    Route::from_path(path).into()
}

/// Header link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub active: bool,
}

/// Brand name shown in the header
pub const BRAND: &str = "NEFRA Connections";

/// Header call-to-action label and its target
pub const PITCH_CTA: (&str, Route) = ("+ Pitch Idea", Route::Search);

const NAV: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("Find Investors", Route::Search),
    ("Startups", Route::Company),
    ("My Profile", Route::Profile),
];

/// Header links with the one matching `current_path` marked active
pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    NAV.iter()
        .map(|&(label, route)| NavItem {
            label,
            route,
            active: route.path() == current_path,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_path_has_its_page() {
        let expected = [
            ("/", Page::Home),
            ("/search", Page::Search),
            ("/company", Page::Company),
            ("/profile", Page::Profile),
            ("/signin", Page::SignIn),
            ("/signup", Page::SignUp),
            ("/settings", Page::Settings),
        ];
        for (path, page) in expected {
            assert_eq!(page_for(path), page, "{}", path);
        }
    }

    #[test]
    fn test_unknown_paths_render_home() {
        for path in ["/nope", "/search/", "", "/SETTINGS", "/company?tab=team"] {
            assert_eq!(page_for(path), Page::Home, "{}", path);
        }
    }

    #[test]
    fn test_nav_marks_only_current_link() {
        let items = nav_items("/company");
        let active: Vec<_> = items.iter().filter(|i| i.active).map(|i| i.label).collect();
        assert_eq!(active, vec!["Startups"]);

        assert!(nav_items("/settings").iter().all(|i| !i.active));
    }
}
