//! JSON body extractor with a uniform rejection.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Message returned when the body cannot be decoded.
pub const INVALID_DATA: &str = "invalid data";

/// JSON extractor whose every rejection is `400 {"error": "invalid data"}`.
///
/// Covers syntax errors, type mismatches, a missing or wrong
/// `Content-Type` and unreadable bodies alike. Field-level validation is
/// left to the caller.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
                Err(AppError::BadRequest(INVALID_DATA.to_string()).into_response())
            }
        }
    }
}
