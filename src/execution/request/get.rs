//! HTTP request executor (GET).

use super::{HttpExecutionResult, finish_json_response};
use crate::error::RestError;
use reqwest::header::HeaderMap;

/// GET request (JSON response).
pub async fn execute_get_request(
    http_client: &reqwest::Client,
    url: &str,
    headers: HeaderMap,
) -> Result<HttpExecutionResult, RestError> {
    tracing::debug!("GET {url}");

    let resp = http_client
        .get(url)
        .headers(headers)
        .send()
        .await
        .map_err(|e| RestError::HttpError(e.to_string()))?;

    finish_json_response(resp).await
}
