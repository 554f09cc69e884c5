//! Error classification alignment: every non-2xx response maps to a typed
//! error carrying the observed status code.

use restkit::{RestClient, RestError};
use serde_json::json;

async fn error_for_status(status: usize, body: &str) -> RestError {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/resource")
        .with_status(status)
        .with_body(body)
        .create_async()
        .await;

    let client = RestClient::new();
    let url = format!("{}/resource", server.url());
    client
        .get_raw(&url)
        .await
        .expect_err("non-2xx must be an error")
}

#[tokio::test]
async fn status_401_maps_to_authentication_error() {
    let err = error_for_status(401, "unauthorized").await;
    assert!(matches!(err, RestError::AuthenticationError(_)));
}

#[tokio::test]
async fn status_403_maps_to_authentication_error() {
    let err = error_for_status(403, "forbidden").await;
    assert!(matches!(err, RestError::AuthenticationError(_)));
}

#[tokio::test]
async fn status_404_maps_to_not_found_with_status() {
    let err = error_for_status(404, "missing").await;
    assert!(matches!(err, RestError::NotFound(_)));
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn status_429_maps_to_rate_limit_with_status() {
    let err = error_for_status(429, "slow down").await;
    assert!(matches!(err, RestError::RateLimitError(_)));
    assert_eq!(err.status_code(), Some(429));
}

#[tokio::test]
async fn status_400_maps_to_invalid_input() {
    let err = error_for_status(400, "bad request").await;
    assert!(matches!(err, RestError::InvalidInput(_)));
}

#[tokio::test]
async fn status_500_maps_to_api_error_with_body_sample() {
    let err = error_for_status(500, "internal kaboom").await;
    match err {
        RestError::ApiError { code, message, .. } => {
            assert_eq!(code, 500);
            assert!(message.contains("internal kaboom"));
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_are_retryable_client_errors_are_not() {
    let server_err = error_for_status(503, "unavailable").await;
    assert!(server_err.is_retryable());

    let client_err = error_for_status(404, "missing").await;
    assert!(!client_err.is_retryable());
}

#[tokio::test]
async fn empty_success_body_is_a_failure() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/register")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = RestClient::new();
    let url = format!("{}/register", server.url());
    let err = client
        .post_json_raw(&url, &json!({"a": 1}))
        .await
        .expect_err("empty body must be an error");

    match err {
        RestError::ApiError { code, message, .. } => {
            assert_eq!(code, 200);
            assert!(message.contains("empty response body"));
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn typed_decode_mismatch_is_json_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/resource")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name":12345}"#)
        .create_async()
        .await;

    #[derive(Debug, serde::Deserialize)]
    struct Named {
        #[allow(dead_code)]
        name: String,
    }

    let client = RestClient::new();
    let url = format!("{}/resource", server.url());
    let result: Result<Named, _> = client.get(&url).await;
    assert!(matches!(result, Err(RestError::JsonError(_))));
}

#[tokio::test]
async fn transport_failure_maps_to_http_error() {
    let client = RestClient::new();
    let result = client.get_raw("http://127.0.0.1:1/down").await;
    match result {
        Err(RestError::HttpError(_)) => {}
        other => panic!("expected HttpError, got: {other:?}"),
    }
}
