//! Structured report endpoint handler.
//!
//! Decodes a raw METAR report into its individual fields and returns them as JSON.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;
use tracing::info;

use super::{error_response, rejection_response, MetarRequest};
use crate::logging::generate_request_id;
use crate::parser::parse_metar;

const ENDPOINT: &str = "/api/metar";

/// Handle POST /api/metar requests
pub async fn metar_handler(payload: Result<Json<MetarRequest>, JsonRejection>) -> Response {
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
        "Processing METAR request"
    );

    match parse_metar(&request.raw) {
        Ok(report) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                airport = %report.airport,
                duration_us = duration.as_micros() as u64,
                "METAR request successful"
            );

            (StatusCode::OK, Json(report)).into_response()
        }
        Err(error) => error_response(
            error,
            ENDPOINT,
            &request_id,
            Some(&format!("raw={}", request.raw)),
        ),
    }
}
