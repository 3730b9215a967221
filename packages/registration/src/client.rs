//! Transport to the registration service.

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, warn};

use crate::config::RegistrationConfig;
use crate::error::{ConfigError, RegistrationError, Result};
use crate::validation::Registration;

/// Something that can deliver a [`Registration`].
///
/// Implementations report a non-success response as
/// [`RegistrationError::ServerRejected`] and anything that prevented a
/// response as [`RegistrationError::Transport`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RegistrationClient {
    async fn register(&self, registration: &Registration) -> Result<()>;
}

/// Registration client for the Flowt HTTP API.
#[derive(Debug, Clone)]
pub struct HttpRegistrationClient {
    http_client: Client,
    endpoint: String,
}

impl HttpRegistrationClient {
    pub fn new(config: RegistrationConfig) -> std::result::Result<Self, ConfigError> {
        if config.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }

        #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
        let mut builder = Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RegistrationClient for HttpRegistrationClient {
    async fn register(&self, registration: &Registration) -> Result<()> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(registration)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, endpoint = %self.endpoint, "Registration request failed");
                RegistrationError::Transport {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, endpoint = %self.endpoint, "Registration rejected by service");
            return Err(RegistrationError::ServerRejected {
                status: status.as_u16(),
            });
        }

        debug!(status = %status, "Registration accepted");

        Ok(())
    }
}
