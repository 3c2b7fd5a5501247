//! HTTP client for the user-config endpoint

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::RemoteStoreError;
use super::model::ProviderConfiguration;
use super::store::RemoteStore;

/// Path of the user-config endpoint, relative to the server base URL
pub const USER_CONFIG_PATH: &str = "/api/user-config";

/// [`RemoteStore`] that talks to the user-config server over HTTP
pub struct HttpRemoteStore {
    /// HTTP client for making requests
    http_client: Client,
    /// Server base URL, without trailing slash
    base_url: String,
}

impl HttpRemoteStore {
    /// Create a new store
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteStoreError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                RemoteStoreError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build the user-config endpoint URL
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, USER_CONFIG_PATH)
    }

    /// Load the configuration the server currently holds
    pub async fn fetch(&self) -> Result<ProviderConfiguration, RemoteStoreError> {
        let response = self.http_client.get(self.endpoint_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteStoreError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn persist(&self, config: &ProviderConfiguration) -> Result<(), RemoteStoreError> {
        let url = self.endpoint_url();
        tracing::debug!(%url, "posting LLM configuration");

        let response = self.http_client.post(&url).json(config).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteStoreError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
