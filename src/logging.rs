//! Logging utilities for the metar-reader server.
//!
//! This module provides structured logging functionality so that every
//! request can be followed through the logs by its request id.

use tracing::{error, warn, Level};

use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use uuid::Uuid;

use crate::error::MetarError;

/// Creates the tracing layer for HTTP request/response logging
pub fn create_http_trace_layer() -> TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    let response_formatter = DefaultOnResponse::new()
        .level(Level::DEBUG)
        .latency_unit(LatencyUnit::Micros);

    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(response_formatter)
}

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log an error with context
pub fn log_error(error: &MetarError, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}

/// Level a failed request is logged at: client errors warn, the rest are errors
pub fn request_error_level(error: &MetarError) -> Level {
    if error.status_code().is_client_error() {
        Level::WARN
    } else {
        Level::ERROR
    }
}

/// Log an error that occurred during request processing
pub fn log_request_error(
    error: &MetarError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) {
    let params = params.unwrap_or("none");
    if request_error_level(error) == Level::WARN {
        warn!(
            error = %error,
            endpoint = endpoint,
            request_id = request_id,
            params = params,
            "Request rejected"
        );
    } else {
        error!(
            error = %error,
            endpoint = endpoint,
            request_id = request_id,
            params = params,
            "Request processing error"
        );
    }
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
