//! HTTP-level building blocks: security headers and HAL responses.
//!
//! ```ignore
//! use axum_helpers::http::{HalJson, HalResource, security_headers};
//!
//! let app = Router::new().layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod hal;
pub mod security;

pub use hal::{HAL_JSON, HalJson, HalResource, Link};
pub use security::security_headers;
