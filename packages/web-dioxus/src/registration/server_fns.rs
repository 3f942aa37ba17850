//! Server functions for the registration flow
//!
//! These run on the server, re-check the submitted values and forward them
//! to the installed [`RegistrationBackend`](super::RegistrationBackend).

use dioxus::prelude::*;

#[cfg(feature = "server")]
use crate::registration::{FieldErrors, RegistrationBackend, RegistrationError, SimulatedBackend};

/// Send a verification code for a new registration
#[server]
pub async fn send_registration_code(name: String, phone: String) -> Result<(), ServerFnError> {
    use crate::registration::PhoneForm;

    let draft = PhoneForm { name, phone }
        .to_draft()
        .map_err(|errors| validation_error(&errors))?;

    backend()
        .initiate(&draft)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Verify the code sent to `phone`
#[server]
pub async fn verify_registration_code(phone: String, otp: String) -> Result<(), ServerFnError> {
    use crate::registration::check_verify_request;

    let (phone, otp) =
        check_verify_request(&phone, &otp).map_err(|errors| validation_error(&errors))?;

    backend()
        .verify(&phone, &otp)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Send a fresh code to `phone`
#[server]
pub async fn resend_registration_code(phone: String) -> Result<(), ServerFnError> {
    use crate::registration::check_resend_request;

    let phone = check_resend_request(&phone).map_err(|errors| validation_error(&errors))?;

    backend()
        .resend(&phone)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
static BACKEND: std::sync::OnceLock<Box<dyn RegistrationBackend>> =
    std::sync::OnceLock::new();

/// Install the backend used by the server functions. Call this at startup.
#[cfg(feature = "server")]
pub fn install_backend(backend: Box<dyn RegistrationBackend>) {
    if BACKEND.set(backend).is_err() {
        tracing::warn!("Registration backend already installed; keeping the first one");
    }
}

#[cfg(feature = "server")]
fn backend() -> &'static dyn RegistrationBackend {
    BACKEND
        .get_or_init(|| Box::new(SimulatedBackend::default()))
        .as_ref()
}

#[cfg(feature = "server")]
fn validation_error(errors: &FieldErrors) -> ServerFnError {
    let message = errors.values().cloned().collect::<Vec<_>>().join("; ");
    ServerFnError::new(RegistrationError::Validation(message).to_string())
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resend_rejects_malformed_phone() {
        let err = resend_registration_code("not-a-phone".to_string())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Phone Number must be 10 digits"));
    }

    #[tokio::test]
    async fn test_verify_rejects_malformed_phone() {
        let err = verify_registration_code("12345".to_string(), "123456".to_string())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Phone Number must be 10 digits"));
    }
}
