use axum::routing::get;
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// GET /             list every employee record
/// GET /{category}   list records for one allow-listed department
/// ```
///
/// Anything else falls through to the framework's 404/405 handling.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(employee::list_employees))
        .route("/{category}", get(employee::list_employees_by_department))
}
