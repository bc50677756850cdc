//! Numeric path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Message returned when the `{id}` segment is not an unsigned 32-bit integer.
pub const INVALID_ID: &str = "invalid id";

/// Extractor for unsigned 32-bit integer ids in the path.
///
/// Anything that does not parse (letters, negatives, values above
/// `u32::MAX`) is rejected with `400 {"error": "invalid id"}`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_customer(IdPath(id): IdPath) -> String {
///     format!("Customer ID: {}", id)
/// }
///
/// let app = Router::new().route("/customers/{id}", get(get_customer));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub u32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let reject = || AppError::BadRequest(INVALID_ID.to_string()).into_response();

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| reject())?;

        raw.parse::<u32>().map(IdPath).map_err(|_| {
            tracing::debug!(id = %raw, "Rejected non-numeric id");
            reject()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route("/{id}", get(|IdPath(id): IdPath| async move { id.to_string() }))
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_accepts_unsigned_integer() {
        assert_eq!(call("/42").await, (StatusCode::OK, "42".to_string()));
    }

    #[tokio::test]
    async fn test_rejects_non_numeric() {
        let (status, body) = call("/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"invalid id"}"#);
    }

    #[tokio::test]
    async fn test_rejects_negative_and_overflow() {
        assert_eq!(call("/-1").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(call("/4294967296").await.0, StatusCode::BAD_REQUEST);
    }
}
