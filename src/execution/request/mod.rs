//! Basic HTTP request executors (non-stream)
//!
//! Provides stable entry points for GET, POST JSON, and POST multipart
//! requests. Each executor is a straight-line build → send → classify-or-parse
//! sequence with no retry logic.

use crate::error::RestError;
use crate::execution::errors as exec_errors;
use reqwest::header::HeaderMap;

mod get;
mod json;
mod multipart;

pub use get::execute_get_request;
pub use json::execute_json_request;
pub use multipart::execute_multipart_request;


/// Result of a successful JSON request.
#[derive(Debug, Clone)]
pub struct HttpExecutionResult {
    /// Parsed response body
    pub json: serde_json::Value,
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
}

/// Shared success/failure handling for JSON responses.
///
/// An empty 2xx body counts as a failure: callers of this crate always expect
/// a decodable JSON payload.
pub(crate) async fn finish_json_response(
    resp: reqwest::Response,
) -> Result<HttpExecutionResult, RestError> {
    if !resp.status().is_success() {
        return Err(exec_errors::classify_error_response(resp).await);
    }

    let status_code = resp.status().as_u16();
    let response_headers = resp.headers().clone();
    let text = resp
        .text()
        .await
        .map_err(|e| RestError::HttpError(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(RestError::api_error(status_code, "empty response body"));
    }

    let json = exec_errors::parse_json_text(&text).map_err(|e| {
        RestError::api_error_with_details(
            status_code,
            format!("failed to parse response body: {e}"),
            serde_json::json!({ "raw": text.chars().take(200).collect::<String>() }),
        )
    })?;

    Ok(HttpExecutionResult {
        json,
        status: status_code,
        headers: response_headers,
    })
}
