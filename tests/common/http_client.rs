//! HTTP client utilities for testing.
//!
//! This module provides helper functions for making HTTP requests to the metar-reader server during tests.

use reqwest::{Client, Response, Url};
use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;

/// Default timeout for HTTP requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a default test client
pub fn create_test_client() -> Client {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .expect("Failed to build test HTTP client")
}

/// Build a URL for a metar-reader server endpoint
pub fn build_url(addr: &SocketAddr, path: &str) -> Url {
    format!("http://{}{}", addr, path)
        .parse()
        .expect("Failed to parse URL")
}

/// Make a GET request to the metar-reader server
pub async fn get(addr: &SocketAddr, path: &str) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    let url = build_url(addr, path);
    Ok(client.get(url).send().await?)
}

/// POST a raw report to one of the report endpoints
pub async fn post_report(
    addr: &SocketAddr,
    path: &str,
    raw: &str,
) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    let url = build_url(addr, path);
    Ok(client
        .post(url)
        .json(&serde_json::json!({ "raw": raw }))
        .send()
        .await?)
}

/// POST a report and parse the JSON response, whatever its status
pub async fn post_report_json(
    addr: &SocketAddr,
    path: &str,
    raw: &str,
) -> Result<(u16, serde_json::Value), Box<dyn Error>> {
    let response = post_report(addr, path, raw).await?;
    let status = response.status().as_u16();
    Ok((status, response.json::<serde_json::Value>().await?))
}
