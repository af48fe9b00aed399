//! Account Forms
//!
//! Placeholder sign-up and sign-in forms. Validation is limited to required
//! fields and the sign-up password confirmation; a successful submit only
//! navigates.

mod signin;
mod signup;

pub use signin::{SignInField, SignInForm};
pub use signup::{SignUpField, SignUpForm};

use thiserror::Error;

/// Inline form errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

pub(crate) fn require(label: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(label))
    } else {
        Ok(())
    }
}
