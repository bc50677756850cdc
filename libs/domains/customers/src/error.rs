use axum_helpers::AppError;
use thiserror::Error;

pub const INVALID_CUSTOMER: &str = "invalid customer data";
pub const CUSTOMER_NOT_FOUND: &str = "customer not found";

/// Failures reported by a [`crate::repository::CustomerRepository`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("customer {0} not found")]
    NotFound(u32),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<sea_orm::DbErr> for RepositoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by [`crate::service::CustomerService`].
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("invalid customer data")]
    InvalidCustomer,

    #[error("customer not found")]
    CustomerNotFound,

    #[error("database operation failed")]
    DatabaseOperation,

    /// Repository failure passed through untouched (list, search, count)
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type CustomerResult<T> = Result<T, CustomerError>;

impl CustomerError {
    /// Map to an HTTP error. Unclassified errors answer with `fallback`
    /// and only their detail is logged.
    pub fn into_app_error(self, fallback: &str) -> AppError {
        match self {
            CustomerError::InvalidCustomer => AppError::BadRequest(INVALID_CUSTOMER.to_string()),
            CustomerError::CustomerNotFound => AppError::NotFound(CUSTOMER_NOT_FOUND.to_string()),
            other => {
                tracing::error!(error = %other, "{}", fallback);
                AppError::InternalServerError(fallback.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_classified_errors_keep_their_message() {
        let err = CustomerError::InvalidCustomer.into_app_error("failed to create customer");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Bad Request: invalid customer data");

        let err = CustomerError::CustomerNotFound.into_app_error("failed to fetch customer");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not Found: customer not found");
    }

    #[test]
    fn test_unclassified_errors_use_fallback() {
        let err = CustomerError::Repository(RepositoryError::Storage("connection reset".into()))
            .into_app_error("failed to fetch customers");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal Server Error: failed to fetch customers");

        let err = CustomerError::DatabaseOperation.into_app_error("failed to delete customer");
        assert_eq!(err.to_string(), "Internal Server Error: failed to delete customer");
    }

    #[test]
    fn test_db_err_becomes_storage() {
        let err: RepositoryError = sea_orm::DbErr::Custom("boom".into()).into();
        assert!(matches!(err, RepositoryError::Storage(msg) if msg.contains("boom")));
    }
}
