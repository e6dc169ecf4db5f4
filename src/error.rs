use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{message::RelayResponse, services::completion::CompletionError};

/// Reply shown to the user whenever the relay cannot produce a real answer.
pub const RELAY_FALLBACK: &str =
    "Oops! I seem to be taking a little nap. 😴 Please try again in a moment! 🐾";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] CompletionError),
}

impl RelayError {
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::InvalidBody(_) => "invalid_body",
            RelayError::Upstream(err) => err.kind(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = RelayResponse::failure(RELAY_FALLBACK, self.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
