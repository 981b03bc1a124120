//! HTTP routing for the metar-reader server.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::handlers::{heartbeat_handler, index_handler, metar_handler, readable_handler};
use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let js_dir = state.config.assets.dir.join("js");

    Router::new()
        .route("/", get(index_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .route("/api/metar", post(metar_handler))
        .route("/api/metar/readable", post(readable_handler))
        .nest_service("/js", ServeDir::new(js_dir))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
