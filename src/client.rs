//! The REST client and its builder.
//!
//! `RestClient` is the public entry point: GET, POST JSON, and POST
//! multipart/form-data with generic JSON response decoding. Configuration is
//! read-only after construction.

use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::encoding::{DateDecoding, decode_json};
use crate::error::RestError;
use crate::execution::headers::HttpHeaderBuilder;
use crate::execution::request::{
    HttpExecutionResult, execute_get_request, execute_json_request, execute_multipart_request,
};
use crate::multipart;
use crate::types::HttpConfig;

/// A minimal async HTTP + JSON client.
///
/// # Example
///
/// ```rust,ignore
/// let client = RestClient::builder()
///     .bearer_token("secret-token")
///     .date_format("%Y-%m-%d %H:%M:%S")
///     .build()?;
///
/// let user: User = client.get("https://api.example.com/users/1").await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: reqwest::Client,
    token: Option<SecretString>,
    date_decoding: DateDecoding,
}

impl RestClient {
    /// Create a client with default configuration: no bearer token, ISO-8601
    /// date decoding.
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            token: None,
            date_decoding: DateDecoding::default(),
        }
    }

    /// Returns a builder for constructing a configured client.
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::new()
    }

    /// GET `url` and decode the JSON response into `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, RestError> {
        let result = self.get_raw(url).await?;
        decode_json(result.json, &self.date_decoding)
    }

    /// GET `url`, returning the parsed body plus status and headers.
    pub async fn get_raw(&self, url: &str) -> Result<HttpExecutionResult, RestError> {
        execute_get_request(&self.http_client, url, self.request_headers(false)?).await
    }

    /// POST `body` as JSON to `url` and decode the JSON response into `T`.
    pub async fn post_json<T, B>(&self, url: &str, body: &B) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let result = self.post_json_raw(url, body).await?;
        decode_json(result.json, &self.date_decoding)
    }

    /// POST `body` as JSON to `url`, returning the parsed body plus status and
    /// headers.
    pub async fn post_json_raw<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<HttpExecutionResult, RestError> {
        let body = serde_json::to_value(body)?;
        execute_json_request(&self.http_client, url, self.request_headers(true)?, &body).await
    }

    /// POST `body` as multipart/form-data to `url` and decode the JSON
    /// response into `T`.
    ///
    /// The body must serialize to a JSON object; each top-level field becomes
    /// a text part. For forms with file parts, use
    /// [`RestClient::post_multipart_form`].
    pub async fn post_multipart<T, B>(&self, url: &str, body: &B) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.post_multipart_form(url, || multipart::form_from(body))
            .await
    }

    /// POST an explicitly built multipart form to `url` and decode the JSON
    /// response into `T`.
    pub async fn post_multipart_form<T, F>(&self, url: &str, build_form: F) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        F: Fn() -> Result<reqwest::multipart::Form, RestError>,
    {
        let result = self.post_multipart_form_raw(url, build_form).await?;
        decode_json(result.json, &self.date_decoding)
    }

    /// POST an explicitly built multipart form to `url`, returning the parsed
    /// body plus status and headers.
    pub async fn post_multipart_form_raw<F>(
        &self,
        url: &str,
        build_form: F,
    ) -> Result<HttpExecutionResult, RestError>
    where
        F: Fn() -> Result<reqwest::multipart::Form, RestError>,
    {
        execute_multipart_request(
            &self.http_client,
            url,
            self.request_headers(false)?,
            build_form,
        )
        .await
    }

    /// Base headers for a request: bearer authorization when configured, JSON
    /// content type when the body is JSON.
    fn request_headers(&self, json_body: bool) -> Result<HeaderMap, RestError> {
        let mut builder = HttpHeaderBuilder::new();
        if let Some(token) = &self.token {
            builder = builder.with_bearer_auth(token.expose_secret())?;
        }
        if json_body {
            builder = builder.with_json_content_type();
        }
        Ok(builder.build())
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RestClient`.
#[derive(Debug, Clone, Default)]
pub struct RestClientBuilder {
    token: Option<String>,
    date_decoding: DateDecoding,
    http_config: HttpConfig,
}

impl RestClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bearer token attached to every request.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Decode response dates with a custom chrono format string.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_decoding = DateDecoding::Formatted(format.into());
        self
    }

    /// Set the date decoding strategy explicitly.
    pub fn date_decoding(mut self, date_decoding: DateDecoding) -> Self {
        self.date_decoding = date_decoding;
        self
    }

    /// Set the HTTP transport configuration.
    pub fn http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<RestClient, RestError> {
        let http_client = build_http_client_from_config(&self.http_config)?;
        Ok(RestClient {
            http_client,
            token: self.token.map(SecretString::from),
            date_decoding: self.date_decoding,
        })
    }
}

/// Build a `reqwest::Client` from `HttpConfig`.
fn build_http_client_from_config(cfg: &HttpConfig) -> Result<reqwest::Client, RestError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = cfg.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = cfg.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(proxy_url) = &cfg.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| RestError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }
    if let Some(user_agent) = &cfg.user_agent {
        builder = builder.user_agent(user_agent);
    }

    // Default headers
    if !cfg.headers.is_empty() {
        let headers = HttpHeaderBuilder::new()
            .with_custom_headers(&cfg.headers)?
            .build();
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| RestError::ConfigurationError(format!("Failed to build HTTP client: {e}")))
}
