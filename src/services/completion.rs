use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::{ChatMessage, Role};

pub const MAX_COMPLETION_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamRole {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: UpstreamRole,
    pub content: String,
}

impl ConversationMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: UpstreamRole::System, content: content.into() }
    }
}

impl From<ChatMessage> for ConversationMessage {
    fn from(msg: ChatMessage) -> Self {
        let role = match msg.role {
            Role::User => UpstreamRole::User,
            Role::Assistant => UpstreamRole::Assistant,
        };
        Self { role, content: msg.content }
    }
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("upstream API key is not configured")]
    MissingApiKey,

    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("AI gateway error: {status}")]
    Status { status: StatusCode, body: String },

    #[error("could not decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl CompletionError {
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::MissingApiKey => "missing_api_key",
            CompletionError::Timeout(_) => "timeout",
            CompletionError::Transport(_) => "transport",
            CompletionError::Status { .. } => "upstream_status",
            CompletionError::Decode(_) => "decode",
        }
    }
}

/// One request, one reply. `Ok(None)` means the upstream answered without content.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        conversation: &[ConversationMessage],
    ) -> Result<Option<String>, CompletionError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ConversationMessage],
    max_completion_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat-completions gateway.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
}

impl GatewayClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CompletionError::Transport)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
            model: model.into(),
            timeout,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout(self.timeout)
        } else {
            CompletionError::Transport(err)
        }
    }
}

#[async_trait]
impl CompletionClient for GatewayClient {
    async fn complete(
        &self,
        conversation: &[ConversationMessage],
    ) -> Result<Option<String>, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or(CompletionError::MissingApiKey)?;

        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages: conversation,
                max_completion_tokens: MAX_COMPLETION_TOKENS,
                temperature: TEMPERATURE,
            })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "AI gateway error");
            return Err(CompletionError::Status { status, body });
        }

        let data: CompletionResponse = res.json().await.map_err(|e| {
            if e.is_timeout() {
                CompletionError::Timeout(self.timeout)
            } else {
                CompletionError::Decode(e)
            }
        })?;

        Ok(data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty()))
    }
}
