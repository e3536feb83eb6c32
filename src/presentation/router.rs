// HTTP routes
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_advisories, get_dashboard, health_check, post_chat, stream_dashboard,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/stream", get(stream_dashboard))
        .route("/advisories", get(get_advisories))
        .route("/chat", post(post_chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
