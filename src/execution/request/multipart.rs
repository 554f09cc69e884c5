//! HTTP request executor (POST, multipart/form-data).

use super::{HttpExecutionResult, finish_json_response};
use crate::error::RestError;
use reqwest::header::HeaderMap;

/// POST request with a multipart/form-data body (JSON response).
pub async fn execute_multipart_request<F>(
    http_client: &reqwest::Client,
    url: &str,
    mut headers: HeaderMap,
    build_form: F,
) -> Result<HttpExecutionResult, RestError>
where
    F: Fn() -> Result<reqwest::multipart::Form, RestError>,
{
    // Multipart must own its boundary-based Content-Type; strip any JSON
    // Content-Type if present.
    headers.remove(reqwest::header::CONTENT_TYPE);

    let form = build_form()?;
    tracing::debug!("POST {url} (multipart, boundary={})", form.boundary());

    let resp = http_client
        .post(url)
        .headers(headers)
        .multipart(form)
        .send()
        .await
        .map_err(|e| RestError::HttpError(e.to_string()))?;

    finish_json_response(resp).await
}
