//! HTTP request handlers for the metar-reader API.
//!
//! This module contains all the endpoint handlers for the web server, plus the
//! helpers they share to turn failures into JSON error responses.

pub mod heartbeat;
pub mod index;
pub mod metar;
pub mod readable;

pub use heartbeat::heartbeat_handler;
pub use index::index_handler;
pub use metar::metar_handler;
pub use readable::readable_handler;

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::error::MetarError;
use crate::logging::log_request_error;

/// Request body accepted by both report endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MetarRequest {
    /// Raw report text
    pub raw: String,
}

/// Build the JSON error response for a failed request
pub(crate) fn error_response(
    error: MetarError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        error.status_code(),
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}

/// Build the JSON error response for a body that could not be decoded
pub(crate) fn rejection_response(
    rejection: JsonRejection,
    endpoint: &str,
    request_id: &str,
) -> Response {
    let error = MetarError::InvalidParameter {
        param: "body".to_string(),
        message: rejection.body_text(),
    };
    error_response(error, endpoint, request_id, None)
}
