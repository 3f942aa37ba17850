//! Form models and validators for the registration flow

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 30;
pub const PHONE_DIGITS: usize = 10;
pub const OTP_DIGITS: usize = 6;

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").unwrap());
static OTP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}$").unwrap());

/// First error message per field, keyed by field name
pub type FieldErrors = BTreeMap<String, String>;

/// Name + phone step of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PhoneForm {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(regex(path = *PHONE_PATTERN, message = "Phone Number must be 10 digits"))]
    pub phone: String,
}

/// Verification code step of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct OtpForm {
    #[validate(regex(path = *OTP_PATTERN, message = "OTP must be 6 digits and contain only numbers"))]
    pub otp: String,
}

/// Phone number a verify or resend request refers to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PhoneNumber {
    #[validate(regex(path = *PHONE_PATTERN, message = "Phone Number must be 10 digits"))]
    pub phone: String,
}

/// A name/phone pair that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub name: String,
    pub phone: String,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        return Err(ValidationError::new("name_too_short")
            .with_message("Name must be at least 2 characters".into()));
    }
    if len > NAME_MAX_CHARS {
        return Err(ValidationError::new("name_too_long")
            .with_message("Name must be at most 30 characters".into()));
    }
    Ok(())
}

impl PhoneForm {
    /// Validate and produce the draft to dispatch
    pub fn to_draft(&self) -> Result<RegistrationDraft, FieldErrors> {
        self.validate().map_err(|e| field_errors(&e))?;
        Ok(RegistrationDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
        })
    }
}

impl OtpForm {
    /// Validate and return the code to verify
    pub fn to_code(&self) -> Result<String, FieldErrors> {
        self.validate().map_err(|e| field_errors(&e))?;
        Ok(self.otp.clone())
    }
}

impl PhoneNumber {
    pub fn checked(&self) -> Result<String, FieldErrors> {
        self.validate().map_err(|e| field_errors(&e))?;
        Ok(self.phone.clone())
    }
}

/// Check a verify request; errors for both fields are reported together
pub fn check_verify_request(phone: &str, otp: &str) -> Result<(String, String), FieldErrors> {
    let phone = PhoneNumber {
        phone: phone.to_string(),
    }
    .checked();
    let otp = OtpForm {
        otp: otp.to_string(),
    }
    .to_code();

    match (phone, otp) {
        (Ok(phone), Ok(otp)) => Ok((phone, otp)),
        (phone, otp) => {
            let mut errors = phone.err().unwrap_or_default();
            errors.extend(otp.err().unwrap_or_default());
            Err(errors)
        }
    }
}

/// Check a resend request
pub fn check_resend_request(phone: &str) -> Result<String, FieldErrors> {
    PhoneNumber {
        phone: phone.to_string(),
    }
    .checked()
}

/// Flatten validator output into one message per field
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field));
                (field.to_string(), message)
            })
        })
        .collect()
}

/// Keep only digits, at most ten of them
pub fn sanitize_phone_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect()
}

/// Truncate to the number of OTP slots
pub fn sanitize_otp_input(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).take(OTP_DIGITS).collect()
}
