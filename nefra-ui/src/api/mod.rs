//! API Client Module
//!
//! Browser-side access to the featured feeds.

pub mod client;

pub use client::*;
