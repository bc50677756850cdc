use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use super::client_addr;

/// Middleware that emits one `info` event per completed request.
///
/// Fields: `method`, `path`, `status`, `latency_ms`, `client`. The response
/// is passed through untouched.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let client = client_addr(request.headers(), request.extensions())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(request).await;

    tracing::info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        client = %client,
        "request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_logger_does_not_alter_response() {
        let app = Router::new()
            .route("/teapot", get(|| async { (StatusCode::IM_A_TEAPOT, "short and stout") }))
            .layer(middleware::from_fn(request_logger));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/teapot")
                    .header("x-forwarded-for", "198.51.100.4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }
}
