//! Crate-wide default values.

/// HTTP transport defaults.
pub mod http {
    use std::time::Duration;

    /// Default overall request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connect timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default `User-Agent` header value.
    pub const USER_AGENT: &str = concat!("restkit/", env!("CARGO_PKG_VERSION"));
}
