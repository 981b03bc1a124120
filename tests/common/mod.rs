//! Common test utilities for metar-reader.
//!
//! This module provides shared utilities for testing the metar-reader server.

pub mod fixtures;
pub mod http_client;
