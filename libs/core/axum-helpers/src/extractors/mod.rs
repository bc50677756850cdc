//! Custom extractors for Axum handlers.
//!
//! Rejections are rendered as `{"error": ...}` bodies with fixed messages,
//! so handlers never see malformed input.

pub mod id_path;
pub mod json_body;
pub mod query_pairs;

pub use id_path::{INVALID_ID, IdPath};
pub use json_body::{INVALID_DATA, JsonBody};
pub use query_pairs::{INVALID_QUERY, QueryPairs};
