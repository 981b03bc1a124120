//! # metar-reader
//!
//! Decodes METAR aviation weather reports and serves the results over HTTP.
//!
//! ## Key Features
//!
//! - **Structured decoding**: airport, time, wind, visibility, clouds, temperature,
//!   dew point, pressure, TEMPO and RMK clauses, each found independently
//! - **Readable summaries**: a multi-line narrative of a report in canonical order
//! - **Small HTTP API**: JSON endpoints plus a static page for manual use
//!
//! ## Architecture
//!
//! - **Parser Layer**: stateless pattern matching over the raw report text
//! - **API Layer**: axum handlers that decode requests and serialize results

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod report;
pub mod router;
pub mod state;

pub use config::Config;
pub use error::{MetarError, Result};
pub use logging::{create_http_trace_layer, generate_request_id, init_tracing, log_error};
pub use parser::{format_narrative, parse_metar, try_format_narrative, ParseMode};
pub use report::{CloudCoverage, CloudLayer, ParsedReport};
pub use router::create_router;
pub use state::AppState;
