// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// Body of a chat turn posted by the widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(
        default,
        deserialize_with = "string_or_nothing",
        skip_serializing_if = "Option::is_none"
    )]
    pub quick_reply: Option<String>,
}

// Topic tags that are not strings are ignored like unknown ones.
fn string_or_nothing<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(tag)) => Some(tag),
        _ => None,
    })
}

/// Reply returned by the relay. `error` is only present on failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResponse {
    pub fn reply(reply: impl Into<String>) -> Self {
        Self { reply: reply.into(), error: None }
    }

    pub fn failure(reply: impl Into<String>, error: impl Into<String>) -> Self {
        Self { reply: reply.into(), error: Some(error.into()) }
    }
}
