//! ==============================================================================
//! form.rs - view-local form state
//! ==============================================================================
//!
//! form fields are ephemeral and never part of AppState. a successful
//! submit hands the derived value to the caller, which dispatches it.
//!
//! upload flow:
//!     Idle --(name and file both set)--> Filled
//!     Filled --(submit)--> Idle, returns MenuRecord
//!     any --(submit with a missing field)--> unchanged, FormError
//!
//! ==============================================================================

use thiserror::Error;

use crate::model::MenuRecord;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Menu uploaded successfully!";

/// the only user-facing error in the app
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,
}

// ==============================================================================
// upload
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// at least one field still empty
    Idle,
    /// name and file chosen, submit will succeed
    Filled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub name: String,
    /// filename only
    pub file: Option<String>,
}

impl UploadForm {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// None clears the selection (file picker cancelled)
    pub fn choose_file(&mut self, file: Option<String>) {
        self.file = file.filter(|f| !f.is_empty());
    }

    pub fn phase(&self) -> UploadPhase {
        if !self.name.is_empty() && self.file.is_some() {
            UploadPhase::Filled
        } else {
            UploadPhase::Idle
        }
    }

    /// consume the fields into a record and reset, or leave untouched
    pub fn submit(&mut self) -> Result<MenuRecord, FormError> {
        if self.phase() != UploadPhase::Filled {
            return Err(FormError::MissingFields);
        }
        let form = std::mem::take(self);
        let file = form.file.ok_or(FormError::MissingFields)?;
        Ok(MenuRecord::new(form.name, file))
    }
}

// ==============================================================================
// login
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// returns the username; the password is dropped either way on success
    pub fn submit(&mut self) -> Result<String, FormError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        self.password.clear();
        Ok(self.username.clone())
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_needs_both_fields() {
        let mut form = UploadForm::default();
        assert_eq!(form.phase(), UploadPhase::Idle);

        form.set_name("Dinner");
        assert_eq!(form.phase(), UploadPhase::Idle);

        form.choose_file(Some("dinner.pdf".to_string()));
        assert_eq!(form.phase(), UploadPhase::Filled);

        form.choose_file(None);
        assert_eq!(form.phase(), UploadPhase::Idle);
    }

    #[test]
    fn test_submit_resets_fields() {
        let mut form = UploadForm::default();
        form.set_name("Lunch Special");
        form.choose_file(Some("lunch.pdf".to_string()));

        let record = form.submit().unwrap();

        assert_eq!(record, MenuRecord::new("Lunch Special", "lunch.pdf"));
        assert_eq!(form, UploadForm::default());
    }

    #[test]
    fn test_submit_missing_name_keeps_form() {
        let mut form = UploadForm::default();
        form.choose_file(Some("lunch.pdf".to_string()));

        assert_eq!(form.submit(), Err(FormError::MissingFields));
        assert_eq!(form.file.as_deref(), Some("lunch.pdf"));
    }

    #[test]
    fn test_empty_filename_is_no_file() {
        let mut form = UploadForm::default();
        form.set_name("x");
        form.choose_file(Some(String::new()));
        assert_eq!(form.phase(), UploadPhase::Idle);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(FormError::MissingFields.to_string(), "Please fill in all fields.");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm {
            username: "ana".to_string(),
            password: String::new(),
        };
        assert_eq!(form.submit(), Err(FormError::MissingFields));

        form.password = "pw".to_string();
        assert_eq!(form.submit().as_deref(), Ok("ana"));
        assert!(form.password.is_empty());
    }
}
