//! Handlers for employee remuneration listings.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use remuneration_core::department::validate_department;
use remuneration_core::error::CoreError;

use crate::error::AppResult;
use crate::response::respond;
use crate::state::AppState;

/// GET /
///
/// List every employee record.
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Response> {
    let employees = state.store.list_all().await?;

    tracing::debug!(count = employees.len(), "Listed all employees");

    Ok(respond(StatusCode::OK, employees))
}

/// GET /{category}
///
/// List employees in one department. The category must be on the department
/// allow-list; otherwise the store is never queried and 400 is returned.
pub async fn list_employees_by_department(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let Path(category) =
        category.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;

    if let Err(err) = validate_department(&category) {
        tracing::warn!(%category, "Rejected unknown department filter");
        return Err(err.into());
    }

    let employees = state.store.list_by_department(&category).await?;

    tracing::debug!(%category, count = employees.len(), "Listed employees by department");

    Ok(respond(StatusCode::OK, employees))
}
