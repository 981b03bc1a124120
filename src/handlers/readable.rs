//! Readable report endpoint handler.
//!
//! Returns a multi-line narrative summary of a METAR report.

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;
use tracing::{info, warn};

use super::{rejection_response, MetarRequest};
use crate::logging::generate_request_id;
use crate::parser::{labels, try_format_narrative, ReadableReport};

const ENDPOINT: &str = "/api/metar/readable";

/// Handle POST /api/metar/readable requests.
///
/// A report that does not match the expected layout still answers 200, with
/// the fixed failure message as its text.
pub async fn readable_handler(payload: Result<Json<MetarRequest>, JsonRejection>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection, ENDPOINT, &request_id),
    };

    info!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        raw = %request.raw,
        "Processing readable METAR request"
    );

    let readable = match try_format_narrative(&request.raw) {
        Ok(text) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Readable METAR request successful"
            );
            text
        }
        Err(error) => {
            warn!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                error = %error,
                "Report did not match the narrative layout"
            );
            labels::NARRATIVE_FAILURE.to_string()
        }
    };

    Json(ReadableReport { readable }).into_response()
}
