//! Query string extractor that tolerates repeated keys.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Message returned when the query string cannot be decoded.
pub const INVALID_QUERY: &str = "invalid query";

/// Decoded `key=value` pairs of the query string, in request order.
///
/// Unlike `Query<T>` into a struct, a repeated key is not an error;
/// [`QueryPairs::first`] reads the first occurrence. Rejections are
/// `400 {"error": "invalid query"}`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::QueryPairs;
///
/// async fn search(query: QueryPairs) -> String {
///     query.first("name").unwrap_or_default().to_string()
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    /// First value for `key`, if the key is present at all.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => Ok(QueryPairs(pairs)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected query string");
                Err(AppError::BadRequest(INVALID_QUERY.to_string()).into_response())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/",
            get(|query: QueryPairs| async move {
                query.first("name").unwrap_or("<none>").to_string()
            }),
        )
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
    async fn test_reads_single_value() {
        assert_eq!(call("/?name=doe").await, (StatusCode::OK, "doe".to_string()));
    }

    #[tokio::test]
    async fn test_repeated_key_uses_first_value() {
        assert_eq!(call("/?name=a&name=b").await, (StatusCode::OK, "a".to_string()));
    }

    #[tokio::test]
    async fn test_decodes_percent_and_plus() {
        assert_eq!(
            call("/?name=Jane+D%C3%B6e").await,
            (StatusCode::OK, "Jane Döe".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_key_and_empty_query() {
        assert_eq!(call("/?other=1").await.1, "<none>");
        assert_eq!(call("/").await.1, "<none>");
    }

    #[test]
    fn test_first_on_empty_value() {
        let pairs = QueryPairs(vec![("name".to_string(), String::new())]);
        assert_eq!(pairs.first("name"), Some(""));
        assert_eq!(pairs.first("email"), None);
    }
}
