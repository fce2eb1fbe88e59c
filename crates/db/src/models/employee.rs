//! Employee remuneration models and DTOs.

use remuneration_core::types::DbId;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `employee` table.
///
/// Field order is the wire order. `id` is left out of the JSON when zero,
/// and money columns serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Employee {
    #[serde(skip_serializing_if = "is_unassigned")]
    pub id: DbId,
    pub name: String,
    pub department: String,
    pub title: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub remuneration: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub expenses: Decimal,
    pub year: i32,
}

fn is_unassigned(id: &DbId) -> bool {
    *id == 0
}

/// DTO for inserting a new employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub department: String,
    pub title: String,
    pub remuneration: Decimal,
    pub expenses: Decimal,
    pub year: i32,
}

impl NewEmployee {
    /// Attach a store-assigned id, producing the persisted record.
    pub fn with_id(self, id: DbId) -> Employee {
        Employee {
            id,
            name: self.name,
            department: self.department,
            title: self.title,
            remuneration: self.remuneration,
            expenses: self.expenses,
            year: self.year,
        }
    }
}
