//! Waitlist email capture

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::registration::{field_errors, FieldErrors, Notice};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WaitlistForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
}

/// Outcome of pressing "Join Waitlist"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitlistOutcome {
    /// Empty field; nothing happens
    Ignored,
    Invalid(FieldErrors),
    Joined(Notice),
}

impl WaitlistForm {
    pub fn submit(&self) -> WaitlistOutcome {
        if self.email.trim().is_empty() {
            return WaitlistOutcome::Ignored;
        }
        match self.validate() {
            Ok(()) => {
                tracing::info!("Waitlist signup captured");
                WaitlistOutcome::Joined(Notice::new(
                    "Success!",
                    "You've been added to our waitlist. We'll notify you when we launch!",
                ))
            }
            Err(errors) => WaitlistOutcome::Invalid(field_errors(&errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(email: &str) -> WaitlistOutcome {
        WaitlistForm {
            email: email.to_string(),
        }
        .submit()
    }

    #[test]
    fn test_empty_email_is_ignored() {
        assert_eq!(submit(""), WaitlistOutcome::Ignored);
        assert_eq!(submit("   "), WaitlistOutcome::Ignored);
    }

    #[test]
    fn test_valid_email_joins() {
        match submit("asha@example.com") {
            WaitlistOutcome::Joined(notice) => assert_eq!(notice.title, "Success!"),
            other => panic!("expected Joined, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_email_reports_field_error() {
        match submit("not-an-email") {
            WaitlistOutcome::Invalid(errors) => {
                assert_eq!(errors["email"], "Please enter a valid email address")
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }
}
