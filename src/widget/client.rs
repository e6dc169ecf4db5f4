use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::message::{RelayRequest, RelayResponse};

pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(45);

#[derive(Debug, Error)]
pub enum RelayCallError {
    #[error("relay request timed out")]
    Timeout,

    #[error("relay transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("relay responded with {status}")]
    Status { status: StatusCode },

    #[error("malformed relay response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn send(&self, request: &RelayRequest) -> Result<String, RelayCallError>;
}

/// Posts chat turns to a deployed relay.
#[derive(Clone, Debug)]
pub struct HttpRelayClient {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpRelayClient {
    pub fn new(
        url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RelayCallError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RelayCallError::Transport)?;
        Ok(Self { client, url: url.into(), api_key })
    }
}

fn classify(err: reqwest::Error) -> RelayCallError {
    if err.is_timeout() {
        RelayCallError::Timeout
    } else {
        RelayCallError::Transport(err)
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn send(&self, request: &RelayRequest) -> Result<String, RelayCallError> {
        let mut req = self.client.post(&self.url).json(request);
        if let Some(key) = &self.api_key {
            req = req.header("apikey", key).bearer_auth(key);
        }

        let res = req.send().await.map_err(classify)?;
        let status = res.status();
        if !status.is_success() {
            return Err(RelayCallError::Status { status });
        }

        let body = res.bytes().await.map_err(classify)?;
        let data: RelayResponse =
            serde_json::from_slice(&body).map_err(|e| RelayCallError::Malformed(e.to_string()))?;
        Ok(data.reply)
    }
}
