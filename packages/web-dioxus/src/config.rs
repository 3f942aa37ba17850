use anyhow::{Context, Result};
use std::time::Duration;

use crate::registration::{HttpBackend, RegistrationBackend, SimulatedBackend, SIMULATED_DELAY};

/// Server-side configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of a registration service; simulated when unset
    pub registration_api_url: Option<String>,
    pub simulated_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let simulated_delay = match lookup("SIMULATED_DELAY_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .context("SIMULATED_DELAY_MS must be a number of milliseconds")?,
            ),
            None => SIMULATED_DELAY,
        };

        Ok(Self {
            registration_api_url: lookup("REGISTRATION_API_URL").filter(|url| !url.trim().is_empty()),
            simulated_delay,
        })
    }

    /// Backend selected by this configuration
    pub fn backend(&self) -> Box<dyn RegistrationBackend> {
        match &self.registration_api_url {
            Some(url) => Box::new(HttpBackend::new(url.clone())),
            None => Box::new(SimulatedBackend::new(self.simulated_delay)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registration_api_url: None,
            simulated_delay: SIMULATED_DELAY,
        }
    }
}
