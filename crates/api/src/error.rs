use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use remuneration_core::error::CoreError;
use remuneration_db::store::StoreError;

use crate::response::respond;

/// Client-facing message for failures whose detail stays in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Rendered through the same envelope as successful responses, with the
/// error message as the `data` payload.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `remuneration_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Store(StoreError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                format!("Employee with id {id} not found"),
            ),
            AppError::Store(StoreError::Storage(err)) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        respond(status, message)
    }
}
