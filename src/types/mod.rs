//! Public configuration types.

mod http;

pub use http::{HttpConfig, HttpConfigBuilder};
