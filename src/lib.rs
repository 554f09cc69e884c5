//! restkit
//!
//! A minimal async HTTP + JSON client utility: GET, POST (JSON body), and
//! POST (multipart/form-data) requests with generic JSON response decoding,
//! optional bearer-token authorization, and optional custom date decoding.
//!
//! # Example
//!
//! ```rust,ignore
//! use restkit::{RestClient, RestError};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Employee {
//!     id: u64,
//!     name: String,
//! }
//!
//! # async fn run() -> Result<(), RestError> {
//! let client = RestClient::builder()
//!     .bearer_token("secret-token")
//!     .build()?;
//!
//! let employee: Employee = client.get("https://api.example.com/employees/1").await?;
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod defaults;
pub mod encoding;
pub mod error;
pub mod execution;
pub mod multipart;
pub mod types;

pub use client::{RestClient, RestClientBuilder};
pub use encoding::DateDecoding;
pub use error::RestError;
pub use execution::request::HttpExecutionResult;
pub use types::HttpConfig;
