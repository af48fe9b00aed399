//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod cards;
pub mod field;
pub mod link;
pub mod loading;
pub mod nav;
pub mod reveal;
pub mod toast;

pub use cards::{CardSize, ConnectionCard, Side, SuccessStoryCard};
pub use field::{Field, PasswordField, SocialButtons};
pub use link::Link;
pub use loading::Loading;
pub use nav::Header;
pub use reveal::Reveal;
pub use toast::Toast;
