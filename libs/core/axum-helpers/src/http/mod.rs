//! HTTP middleware.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::request_logger;
//!
//! let app = Router::new().layer(axum::middleware::from_fn(request_logger));
//! ```

pub mod client_addr;
pub mod request_logger;

pub use client_addr::client_addr;
pub use request_logger::request_logger;
