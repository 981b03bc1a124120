//! Index page handler.
//!
//! Serves `index.html` from the configured assets directory. The page's
//! scripts under `/js` are served by a `ServeDir` in the router.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::error;

use crate::state::AppState;

/// Handle GET / requests
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Response {
    let path = state.config.assets.dir.join("index.html");

    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read index page");
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": "Index page not found"
                })),
            )
                .into_response()
        }
    }
}
