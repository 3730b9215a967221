//! Registration endpoint and timeout, with environment overrides.

use std::time::Duration;

use crate::error::ConfigError;

/// Pre-registration endpoint of the Flowt API.
pub const DEFAULT_ENDPOINT: &str = "https://api.flowt.co.in/v1/pre-register";

const ENDPOINT_VAR: &str = "FLOWT_REGISTRATION_ENDPOINT";
const TIMEOUT_VAR: &str = "FLOWT_REGISTRATION_TIMEOUT_SECS";

/// Where and how registrations are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    pub endpoint: String,
    /// `None` waits for the service indefinitely. Ignored on wasm, where the
    /// browser's fetch decides.
    pub timeout: Option<Duration>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl RegistrationConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables, reading `.env` first
    /// when present.
    ///
    /// - `FLOWT_REGISTRATION_ENDPOINT` overrides [`DEFAULT_ENDPOINT`]
    /// - `FLOWT_REGISTRATION_TIMEOUT_SECS` sets a request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            let endpoint = endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::EmptyEndpoint);
            }
            config.endpoint = endpoint.to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            if secs == 0 {
                return Err(ConfigError::InvalidTimeout { value: raw });
            }
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
