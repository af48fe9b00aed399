//! Viewport Geometry
//!
//! Intersection math for targets that have no browser observer: a root
//! rectangle (the viewport grown or shrunk by a CSS-style margin) against a
//! target rectangle, both in document pixels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis-aligned rectangle in document pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap with `other`, or `None` when the two do not touch
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Visible window onto the document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// Same viewport scrolled vertically to `scroll_y`
    pub fn scrolled_to(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.scroll_x, self.scroll_y, self.width, self.height)
    }
}

/// CSS-style root margin in pixels, `top right bottom left`.
///
/// Positive values grow the root, negative values shrink it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    /// Apply the margin to a root rectangle
    pub fn apply(&self, root: Rect) -> Rect {
        Rect::new(
            root.left - self.left,
            root.top - self.top,
            root.width + self.left + self.right,
            root.height + self.top + self.bottom,
        )
    }
}

/// Error parsing a root margin string
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid root margin {0:?}: expected 1 to 4 pixel values")]
pub struct RootMarginParseError(String);

impl FromStr for RootMargin {
    type Err = RootMarginParseError;

    /// Accepts 1 to 4 values with the usual CSS shorthand expansion.
    /// Each value is a number with an optional `px` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RootMarginParseError(s.to_string());
        let values = s
            .split_whitespace()
            .map(|part| part.trim_end_matches("px").parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| err())?;

        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => return Err(err()),
        };

        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl Serialize for RootMargin {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RootMargin {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Fraction of `target` visible inside `root`, in `0.0..=1.0`.
///
/// A zero-area target counts as fully visible when it touches the root.
pub fn intersection_ratio(root: &Rect, target: &Rect) -> f64 {
    match root.intersection(target) {
        None => 0.0,
        Some(_) if target.area() == 0.0 => 1.0,
        Some(overlap) => (overlap.area() / target.area()).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margin_shorthand() {
        let m: RootMargin = "0px 0px -50px 0px".parse().unwrap();
        assert_eq!(m.bottom, -50.0);
        assert_eq!(m.top, 0.0);

        let m: RootMargin = "10px".parse().unwrap();
        assert_eq!((m.top, m.right, m.bottom, m.left), (10.0, 10.0, 10.0, 10.0));

        let m: RootMargin = "5 20".parse().unwrap();
        assert_eq!((m.top, m.right, m.bottom, m.left), (5.0, 20.0, 5.0, 20.0));

        assert!("".parse::<RootMargin>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
        assert!("abc".parse::<RootMargin>().is_err());
    }

    #[test]
    fn test_negative_bottom_margin_shrinks_root() {
        let margin: RootMargin = "0px 0px -50px 0px".parse().unwrap();
        let root = margin.apply(Viewport::new(1200.0, 800.0).rect());
        assert_eq!(root.bottom(), 750.0);

        // Top 40px of a 100px card peeks in under the real fold but sits
        // inside the 50px dead zone.
        let card = Rect::new(0.0, 760.0, 300.0, 100.0);
        assert_eq!(intersection_ratio(&root, &card), 0.0);
    }

    #[test]
    fn test_partial_ratio() {
        let root = Viewport::new(1000.0, 1000.0).rect();
        let card = Rect::new(0.0, 900.0, 100.0, 200.0);
        assert!((intersection_ratio(&root, &card) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_margin_round_trips_through_serde() {
        let margin: RootMargin = "0px 0px -50px 0px".parse().unwrap();
        let json = serde_json::to_string(&margin).unwrap();
        let back: RootMargin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, margin);
    }
}
