//! Scroll Reveal
//!
//! One-shot entrance animations. Elements are registered in a
//! [`RevealRegistry`], staggered once the page settles, and flipped to
//! active the first time they become visible.
//!
//! ## Flow
//!
//! 1. Route or data changes → wait `settle_delay_ms`
//! 2. Pending candidates get `index * stagger_ms` delays
//! 3. Candidates are handed to a viewport watcher (threshold, root margin)
//! 4. First sufficient intersection → active, then unobserved for good
//! 5. Teardown cancels the pending delay and disconnects the watcher
//!
//! The browser crate drives steps 3 and 4 with `IntersectionObserver`; native
//! code uses [`GeometryWatcher`] and the [`RevealScheduler`].

mod geometry;
mod registry;
#[cfg(feature = "native")]
mod scheduler;

pub use geometry::{intersection_ratio, Rect, RootMargin, RootMarginParseError, Viewport};
pub use registry::{RevealId, RevealRegistry, RevealState};
#[cfg(feature = "native")]
pub use scheduler::{
    GeometryWatcher, IntersectionEntry, RevealScheduler, SharedRegistry, ViewportWatcher,
};

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reveal timing and visibility tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Delay after a route/data change before candidates are collected
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,

    /// Per-candidate stagger step
    #[serde(default = "default_stagger")]
    pub stagger_ms: u64,

    /// Visible fraction needed to activate
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Root margin applied to the viewport
    #[serde(default = "default_root_margin")]
    pub root_margin: RootMargin,
}

fn default_settle_delay() -> u64 {
    100
}

fn default_stagger() -> u64 {
    80
}

fn default_threshold() -> f64 {
    0.1
}

fn default_root_margin() -> RootMargin {
    RootMargin {
        bottom: -50.0,
        ..RootMargin::default()
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay(),
            stagger_ms: default_stagger(),
            threshold: default_threshold(),
            root_margin: default_root_margin(),
        }
    }
}

impl RevealConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    /// Whether an intersection ratio counts as "in view"
    pub fn is_visible(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }

    /// Effective root rectangle for a viewport
    pub fn root(&self, viewport: &Viewport) -> Rect {
        self.root_margin.apply(viewport.rect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_observer_options() {
        let config = RevealConfig::default();
        assert_eq!(config.settle_delay(), Duration::from_millis(100));
        assert_eq!(config.root_margin.to_string(), "0px 0px -50px 0px");
        assert!(config.is_visible(0.1));
        assert!(!config.is_visible(0.09));
        assert!(!config.is_visible(0.0));
    }

    #[test]
    fn test_config_deserializes_partial() {
        let config: RevealConfig =
            serde_json::from_str(r#"{"stagger_ms": 120, "root_margin": "0px 0px -80px 0px"}"#)
                .unwrap();
        assert_eq!(config.stagger_step(), Duration::from_millis(120));
        assert_eq!(config.root_margin.bottom, -80.0);
        assert_eq!(config.settle_delay_ms, 100);
    }
}
