//! enquiry-sv library - long-running HTTP server for the inquiry intake

use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use enquiry_common::IntakeService;

use crate::chat::ChatClient;

pub mod api;
pub mod chat;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<IntakeService>,
    pub chat: Arc<ChatClient>,
}

impl AppState {
    pub fn new(service: Arc<IntakeService>, chat: Arc<ChatClient>) -> Self {
        Self { service, chat }
    }
}

/// Build application router
///
/// The browser form and dashboard are served from another origin, so CORS is
/// permissive; the listing endpoint is still gated by the access guard.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route(
            "/api/submissions",
            post(api::create_submission).get(api::list_submissions),
        )
        .route("/api/chat", post(api::chat_reply))
        .route("/api/health", get(api::health_check))
        .layer(cors)
        .with_state(state)
}
