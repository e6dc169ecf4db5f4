use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::RelayError,
    message::RelayResponse,
    services::{metrics_manager::MetricsData, relay::relay_turn},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<RelayResponse>, RelayError> {
    match relay_turn(state.completion.as_ref(), &state.metrics, &body).await {
        Ok(reply) => {
            state.metrics.increment_outcome("reply").await;
            Ok(Json(RelayResponse::reply(reply)))
        }
        Err(err) => {
            tracing::error!(kind = err.kind(), error = %err, "PawsBot relay failed");
            state.metrics.increment_outcome(err.kind()).await;
            Err(err)
        }
    }
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
