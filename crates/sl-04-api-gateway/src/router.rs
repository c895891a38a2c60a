//! Router construction.

use crate::handlers;
use crate::ports::outbound::RegistryBackend;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn RegistryBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn RegistryBackend>) -> Self {
        Self { backend }
    }
}

/// Builds the REST router with CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/block/:height", get(handlers::get_block_by_height))
        .route("/block", post(handlers::post_block))
        .route("/stars/:selector", get(handlers::get_stars))
        .route("/requestValidation", post(handlers::post_request_validation))
        .route(
            "/message-signature/validate",
            post(handlers::post_validate_signature),
        )
        .route("/chain/validate", get(handlers::get_validate_chain))
        .route("/debug/mempool", get(handlers::get_mempool))
        .route("/debug/access-list", get(handlers::get_access_list))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
