//! API Routes
//!
//! Route handlers organized by functionality.

pub mod featured;
pub mod health;
