//! The record store seam used by HTTP handlers.
//!
//! Handlers depend on [`EmployeeStore`] rather than a pool, so the router can
//! run against [`PgEmployeeStore`] in production and an in-memory store in
//! tests.

use async_trait::async_trait;
use remuneration_core::types::DbId;

use crate::models::employee::{Employee, NewEmployee};
use crate::repositories::EmployeeRepo;
use crate::DbPool;

/// Failure of a record store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Employee with id {0} not found")]
    NotFound(DbId),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// CRUD access to employee records.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Insert a record and return its newly assigned id.
    async fn create(&self, employee: &NewEmployee) -> Result<DbId, StoreError>;

    /// Fetch one record. Fails with [`StoreError::NotFound`] on a miss.
    async fn get(&self, id: DbId) -> Result<Employee, StoreError>;

    /// Every record. An empty table yields an empty vector.
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Records whose department equals `department` exactly.
    async fn list_by_department(&self, department: &str) -> Result<Vec<Employee>, StoreError>;

    /// Overwrite the record with `employee.id`. Returns whether a row matched.
    async fn update(&self, employee: &Employee) -> Result<bool, StoreError>;

    /// Remove the record with `id`. Returns whether a row matched.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}

/// [`EmployeeStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: DbPool,
}

impl PgEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn create(&self, employee: &NewEmployee) -> Result<DbId, StoreError> {
        let id = EmployeeRepo::create(&self.pool, employee).await?;
        tracing::debug!(employee_id = id, "Employee record created");
        Ok(id)
    }

    async fn get(&self, id: DbId) -> Result<Employee, StoreError> {
        EmployeeRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(EmployeeRepo::list(&self.pool).await?)
    }

    async fn list_by_department(&self, department: &str) -> Result<Vec<Employee>, StoreError> {
        Ok(EmployeeRepo::list_by_department(&self.pool, department).await?)
    }

    async fn update(&self, employee: &Employee) -> Result<bool, StoreError> {
        Ok(EmployeeRepo::update(&self.pool, employee).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(EmployeeRepo::delete(&self.pool, id).await?)
    }
}
