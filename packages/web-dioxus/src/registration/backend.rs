//! Backends that send, verify and resend registration codes

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::RegistrationError;
use super::validate::RegistrationDraft;

/// Delay the simulated backend waits before answering
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Registration backend
///
/// Every operation either succeeds or returns a [`RegistrationError`];
/// the registration page turns errors into its alert message.
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    /// Issue a one-time code for a new registration
    async fn initiate(&self, draft: &RegistrationDraft) -> Result<(), RegistrationError>;

    /// Check a code previously sent to `phone`
    async fn verify(&self, phone: &str, otp: &str) -> Result<(), RegistrationError>;

    /// Issue a fresh code to `phone`
    async fn resend(&self, phone: &str) -> Result<(), RegistrationError>;
}

// ============================================================================
// Simulated backend
// ============================================================================

/// Waits for a fixed delay, then succeeds. Codes are never checked.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY)
    }
}

#[async_trait]
impl RegistrationBackend for SimulatedBackend {
    async fn initiate(&self, draft: &RegistrationDraft) -> Result<(), RegistrationError> {
        tokio::time::sleep(self.delay).await;
        info!(phone = %draft.phone, "Simulated verification code sent");
        Ok(())
    }

    async fn verify(&self, phone: &str, _otp: &str) -> Result<(), RegistrationError> {
        tokio::time::sleep(self.delay).await;
        info!(%phone, "Simulated verification accepted");
        Ok(())
    }

    async fn resend(&self, phone: &str) -> Result<(), RegistrationError> {
        tokio::time::sleep(self.delay).await;
        info!(%phone, "Simulated verification code resent");
        Ok(())
    }
}

// ============================================================================
// HTTP backend
// ============================================================================

/// Body returned by every `/register/*` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
struct InitiateBody<'a> {
    name: &'a str,
    phone: &'a str,
}

#[derive(Serialize)]
struct VerifyBody<'a> {
    phone: &'a str,
    otp: &'a str,
}

#[derive(Serialize)]
struct ResendBody<'a> {
    phone: &'a str,
}

/// Talks to a registration service over JSON/HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/register/{}", self.base_url.trim_end_matches('/'), action)
    }

    async fn post<B: Serialize + Sync>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<ApiResponse, RegistrationError> {
        let url = self.endpoint(action);
        info!(%url, "Registration request");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiResponse>(&text)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or(text);
            return Err(RegistrationError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ApiResponse = serde_json::from_str(&text)?;
        if !parsed.success {
            return Err(RegistrationError::Rejected {
                status: status.as_u16(),
                message: parsed
                    .message
                    .unwrap_or_else(|| format!("{} was not accepted", action)),
            });
        }

        Ok(parsed)
    }
}

#[async_trait]
impl RegistrationBackend for HttpBackend {
    async fn initiate(&self, draft: &RegistrationDraft) -> Result<(), RegistrationError> {
        let body = InitiateBody {
            name: &draft.name,
            phone: &draft.phone,
        };
        self.post("initiate", &body).await.map(|_| ())
    }

    async fn verify(&self, phone: &str, otp: &str) -> Result<(), RegistrationError> {
        self.post("verify", &VerifyBody { phone, otp }).await.map(|_| ())
    }

    async fn resend(&self, phone: &str) -> Result<(), RegistrationError> {
        self.post("resend", &ResendBody { phone }).await.map(|_| ())
    }
}
