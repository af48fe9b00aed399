use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{require, FormError};
use crate::routing::{History, Route, Router};

/// Editable sign-up field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    Name,
    Email,
    Password,
    Confirm,
}

/// Sign-up form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    #[serde(skip)]
    error: Option<FormError>,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a field. Any edit clears the inline error.
    pub fn set(&mut self, field: SignUpField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SignUpField::Name => self.name = value,
            SignUpField::Email => self.email = value,
            SignUpField::Password => self.password = value,
            SignUpField::Confirm => self.confirm = value,
        }
        self.error = None;
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        require("Full name", &self.name)?;
        require("Email", &self.email)?;
        require("Password", &self.password)?;
        require("Confirm password", &self.confirm)?;

        if self.password != self.confirm {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    /// Validate and, on success, navigate to the sign-in page.
    ///
    /// A failure is kept as the form's inline error and the location is
    /// left unchanged.
    pub fn submit<H: History>(&mut self, router: &mut Router<H>) -> Result<(), FormError> {
        match self.validate() {
            Ok(()) => {
                self.error = None;
                debug!(email = %self.email, "Sign-up accepted");
                router.navigate_to(Route::SignIn);
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(password: &str, confirm: &str) -> SignUpForm {
        let mut form = SignUpForm::new();
        form.set(SignUpField::Name, "Divya R.");
        form.set(SignUpField::Email, "divya@psgitech.ac.in");
        form.set(SignUpField::Password, password);
        form.set(SignUpField::Confirm, confirm);
        form
    }

    #[test]
    fn test_mismatch_shows_error_and_stays() {
        let mut router = Router::in_memory("/signup");
        let mut form = filled("abc123", "abc999");

        let err = form.submit(&mut router).unwrap_err();
        assert_eq!(err, FormError::PasswordMismatch);
        assert_eq!(
            form.error().map(ToString::to_string).as_deref(),
            Some("Passwords do not match")
        );
        assert_eq!(router.current_route(), Route::SignUp);
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_matching_passwords_navigate_to_signin() {
        let mut router = Router::in_memory("/signup");
        let mut form = filled("abc123", "abc123");

        form.submit(&mut router).unwrap();
        assert!(form.error().is_none());
        assert_eq!(router.current_path(), "/signin");
    }

    #[test]
    fn test_editing_clears_error() {
        let mut router = Router::in_memory("/signup");
        let mut form = filled("abc123", "abc999");
        let _ = form.submit(&mut router);
        assert!(form.error().is_some());

        form.set(SignUpField::Name, "Divya Ramesh");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_missing_field_reported_first() {
        let mut router = Router::in_memory("/signup");
        let mut form = SignUpForm::new();
        form.set(SignUpField::Email, "x@y.z");

        let err = form.submit(&mut router).unwrap_err();
        assert_eq!(err, FormError::MissingField("Full name"));
        assert_eq!(err.to_string(), "Full name is required");
        assert_eq!(router.current_path(), "/signup");
    }
}
