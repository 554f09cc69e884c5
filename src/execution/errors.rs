//! HTTP error handling and normalization utilities
//!
//! Centralizes error classification and response-body parsing to avoid
//! duplicating this logic in individual executors.

use crate::error::RestError;
use reqwest::header::HeaderMap;

/// Classify an HTTP failure into a more specific error type.
///
/// Inspects the status code, response body and headers to derive a
/// better-typed error (e.g., `RateLimitError` / `NotFound`) rather than a
/// generic `ApiError`. Messages embed the observed status and a bounded body
/// sample.
pub fn classify_http_error(
    status: u16,
    body_text: &str,
    headers: &HeaderMap,
    fallback_message: Option<&str>,
) -> RestError {
    // Limit body sample size to avoid noisy errors
    let body_sample = body_text.chars().take(200).collect::<String>();

    // 429 Too Many Requests → RateLimit with optional Retry-After hint
    if status == 429 {
        let retry_after = headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        return RestError::RateLimitError(format!(
            "http=429 retry_after={retry_after} body_sample={body_sample}"
        ));
    }

    // 401/403 → Authentication
    if status == 401 {
        return RestError::AuthenticationError(format!(
            "unauthorized body_sample={body_sample}"
        ));
    }
    if status == 403 {
        return RestError::AuthenticationError(format!("forbidden body_sample={body_sample}"));
    }

    // 404 → NotFound
    if status == 404 {
        return RestError::NotFound(format!("http=404 body_sample={body_sample}"));
    }

    // 400/413/415 → InvalidInput
    if status == 400 {
        return RestError::InvalidInput(format!("http=400 bad request body_sample={body_sample}"));
    }
    if status == 413 {
        return RestError::InvalidInput(format!(
            "http=413 payload too large body_sample={body_sample}"
        ));
    }
    if status == 415 {
        return RestError::InvalidInput(format!(
            "http=415 unsupported media type body_sample={body_sample}"
        ));
    }

    // Everything else keeps the raw status
    let message = if body_sample.trim().is_empty() {
        fallback_message.unwrap_or("request failed").to_string()
    } else {
        body_sample
    };
    RestError::api_error(status, message)
}

/// Read the response body, classify the failure, and return the error.
pub async fn classify_error_response(resp: reqwest::Response) -> RestError {
    let status = resp.status();
    let headers = resp.headers().clone();
    let text = resp.text().await.unwrap_or_default();
    let error = classify_http_error(status.as_u16(), &text, &headers, status.canonical_reason());
    tracing::debug!("request failed: {error}");
    error
}

/// Parse JSON text and return library error types.
pub fn parse_json_text(text: &str) -> Result<serde_json::Value, RestError> {
    serde_json::from_str(text).map_err(|e| RestError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_statuses() {
        let headers = HeaderMap::new();
        assert!(matches!(
            classify_http_error(401, "nope", &headers, None),
            RestError::AuthenticationError(_)
        ));
        assert!(matches!(
            classify_http_error(404, "", &headers, Some("Not Found")),
            RestError::NotFound(_)
        ));
        assert!(matches!(
            classify_http_error(400, "bad", &headers, None),
            RestError::InvalidInput(_)
        ));
        assert!(matches!(
            classify_http_error(500, "boom", &headers, None),
            RestError::ApiError { code: 500, .. }
        ));
    }

    #[test]
    fn rate_limit_includes_retry_after() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", "5".parse().unwrap());
        match classify_http_error(429, "slow down", &headers, None) {
            RestError::RateLimitError(msg) => assert!(msg.contains("retry_after=5")),
            other => panic!("expected RateLimitError, got: {other:?}"),
        }
    }

    #[test]
    fn fallback_message_used_for_empty_body() {
        match classify_http_error(502, "   ", &HeaderMap::new(), Some("Bad Gateway")) {
            RestError::ApiError { code, message, .. } => {
                assert_eq!(code, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected ApiError, got: {other:?}"),
        }
    }

    #[test]
    fn body_sample_is_bounded() {
        let long_body = "x".repeat(1000);
        match classify_http_error(500, &long_body, &HeaderMap::new(), None) {
            RestError::ApiError { message, .. } => assert_eq!(message.len(), 200),
            other => panic!("expected ApiError, got: {other:?}"),
        }
    }
}
