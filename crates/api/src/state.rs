use std::sync::Arc;

use remuneration_db::store::EmployeeStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Record store used by every handler.
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}
