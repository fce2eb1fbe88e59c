//! Request handlers.
//!
//! Handlers delegate to the injected [`EmployeeStore`](remuneration_db::store::EmployeeStore)
//! and map errors via [`AppError`](crate::error::AppError).

pub mod employee;
