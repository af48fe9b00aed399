//! Pages
//!
//! Top-level page components, one per route.

pub mod company;
pub mod home;
pub mod profile;
pub mod search;
pub mod settings;
pub mod signin;
pub mod signup;

pub use company::Company;
pub use home::Home;
pub use profile::Profile;
pub use search::Search;
pub use settings::Settings;
pub use signin::SignIn;
pub use signup::SignUp;
