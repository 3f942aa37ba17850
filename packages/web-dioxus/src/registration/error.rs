//! Error type for registration backend operations

/// Error returned by a [`RegistrationBackend`](super::RegistrationBackend)
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
