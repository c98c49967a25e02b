//! HTTP transport capability used by the client
//!
//! The client never talks to reqwest directly; it asks a [`Transport`] to
//! GET an E-utilities endpoint and hand back parsed JSON. Production code uses
//! [`ReqwestTransport`], tests can swap in a double.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};

/// Send a GET request and return the parsed JSON body
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `endpoint` (relative to the configured base URL) with `params`
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the request could not be sent
    /// * `PubMedError::ApiError` - If the response status is not a success
    /// * `PubMedError::Parse` - If the body is not valid JSON
    async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value>;
}

/// [`Transport`] backed by a reqwest client
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    /// Build a transport honouring the config's timeout and user agent
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Use a pre-built reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Full request URL with endpoint parameters followed by API parameters
    pub(crate) fn build_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}", self.config.effective_base_url(), endpoint);

        let mut pairs: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();

        pairs.extend(
            self.config
                .build_api_params()
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value))),
        );

        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&pairs.join("&"));
        }

        url
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = self.build_url(endpoint, params);

        debug!(endpoint = endpoint, "Making API request");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PubMedError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        Ok(value)
    }
}
