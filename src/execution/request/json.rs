//! HTTP request executor (POST, JSON body).

use super::{HttpExecutionResult, finish_json_response};
use crate::error::RestError;
use reqwest::header::HeaderMap;

/// POST request with a JSON body (JSON response).
///
/// Headers are expected to carry `content-type: application/json`; see
/// [`crate::execution::headers::HttpHeaderBuilder::with_json_content_type`].
pub async fn execute_json_request(
    http_client: &reqwest::Client,
    url: &str,
    headers: HeaderMap,
    body: &serde_json::Value,
) -> Result<HttpExecutionResult, RestError> {
    tracing::debug!("POST {url} (json)");

    let resp = http_client
        .post(url)
        .headers(headers)
        .json(body)
        .send()
        .await
        .map_err(|e| RestError::HttpError(e.to_string()))?;

    finish_json_response(resp).await
}
