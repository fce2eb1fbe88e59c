//! Repository for the `employee` table.
//!
//! Every operation is a single parameterized statement; nothing here opens a
//! transaction.

use remuneration_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{Employee, NewEmployee};

/// Column list for `employee` queries.
const COLUMNS: &str = "id, name, department, title, remuneration, expenses, year";

/// Provides data access for employee remuneration records.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new record, returning the generated id.
    pub async fn create(pool: &PgPool, dto: &NewEmployee) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO employee (name, department, title, remuneration, expenses, year) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.department)
        .bind(&dto.title)
        .bind(dto.remuneration)
        .bind(dto.expenses)
        .bind(dto.year)
        .fetch_one(pool)
        .await
    }

    /// Find a record by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every record, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee ORDER BY id");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// List records whose department equals `department` exactly.
    pub async fn list_by_department(
        pool: &PgPool,
        department: &str,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee WHERE department = $1 ORDER BY id");
        sqlx::query_as::<_, Employee>(&query)
            .bind(department)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every column of the record identified by `employee.id`.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(pool: &PgPool, employee: &Employee) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE employee SET \
                 name = $2, \
                 department = $3, \
                 title = $4, \
                 remuneration = $5, \
                 expenses = $6, \
                 year = $7 \
             WHERE id = $1",
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(&employee.department)
        .bind(&employee.title)
        .bind(employee.remuneration)
        .bind(employee.expenses)
        .bind(employee.year)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a record by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
