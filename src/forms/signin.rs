use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{require, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInField {
    Email,
    Password,
}

/// Sign-in form state. No credentials are checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    #[serde(skip)]
    error: Option<FormError>,
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: SignInField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SignInField::Email => self.email = value,
            SignInField::Password => self.password = value,
        }
        self.error = None;
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        require("Email", &self.email)?;
        require("Password", &self.password)
    }

    /// Accept any filled-in form. The page stays where it is.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if let Err(e) = self.validate() {
            self.error = Some(e.clone());
            return Err(e);
        }
        self.error = None;
        debug!(email = %self.email, "Sign-in accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_form_is_accepted() {
        let mut form = SignInForm::new();
        form.set(SignInField::Email, "alex@techventures.io");
        form.set(SignInField::Password, "hunter2");

        form.submit().unwrap();
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_blank_password_rejected() {
        let mut form = SignInForm::new();
        form.set(SignInField::Email, "alex@techventures.io");
        form.set(SignInField::Password, "   ");

        assert_eq!(form.submit(), Err(FormError::MissingField("Password")));
        assert_eq!(form.error(), Some(&FormError::MissingField("Password")));

        form.set(SignInField::Password, "hunter2");
        assert_eq!(form.error(), None);
    }
}
