// src/core/net.rs

// Single-attempt HTTP GET (blocking reqwest). No retry by design of the tool:
// a failed fetch ends the run.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::consts::USER_AGENT;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("HTTP error: {status} {url}")]
    Status { status: StatusCode, url: String },

    #[error("failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Request { source, .. } | FetchError::Body { source, .. } => source.is_timeout(),
            FetchError::Status { .. } => false,
        }
    }
}

pub fn http_get(url: &str, timeout_secs: u64) -> Result<String, FetchError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

    logf!("GET {url}");
    let resp = client
        .get(url)
        .send()
        .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status, url: url.to_string() });
    }

    let body = resp
        .text()
        .map_err(|source| FetchError::Body { url: url.to_string(), source })?;
    logf!("GET {url} -> {status}, {} bytes", body.len());
    Ok(body)
}
