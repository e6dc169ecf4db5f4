// src/routes/mod.rs
pub mod chat;
pub mod pets;

use crate::state::SharedState;
use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler};
use pets::{get_pet_handler, list_pets_handler, pet_facts_handler};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub fn create_router(state: SharedState) -> Router {
    let admin_routes = Router::new()
        .route("/metrics", get(get_metrics_handler))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/pawsbot-chat", post(chat_handler))
        .route("/functions/v1/pawsbot-chat", post(chat_handler))
        .route("/pets", get(list_pets_handler))
        .route("/pets/facts", get(pet_facts_handler))
        .route("/pets/{pet_type}", get(get_pet_handler))
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

// Answers every OPTIONS probe itself: 200, empty body, permissive headers.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::HeaderName::from_static("x-client-info"),
            header::HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

async fn auth_middleware(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = state.admin_key.as_deref() else {
        return Err(StatusCode::UNAUTHORIZED);
    };
    match req.headers().get("x-admin-key") {
        Some(val) if val.as_bytes() == expected.as_bytes() => Ok(next.run(req).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}
