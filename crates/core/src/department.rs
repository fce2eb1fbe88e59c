//! Department allow-list used to validate the category path segment.
//!
//! Matching is exact and case-sensitive. No trimming or normalization is
//! applied, so `"human resources"` and `" Human Resources"` are both rejected.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::CoreError;

/// Message returned to clients when a category is not a known department.
pub const UNKNOWN_DEPARTMENT_MESSAGE: &str = "The entered subdomain is not a department";

/// Every department name that may be used as a filter.
pub const DEPARTMENTS: [&str; 15] = [
    "Engineering Services",
    "Dev Svcs, Bldg & Licensing",
    "Mayor & City Council",
    "Office of the City Manager",
    "City Clerk's Office",
    "Planning, Urban Des & Sustain",
    "IT, Digital Strategy & 311",
    "Community Services",
    "Real Estate & Facilities Mgmt",
    "Board of Parks & Recreation",
    "Vancouver Public Library Board",
    "Finance, Risk&Supply Chain Mgt",
    "VFRS & OEM",
    "Human Resources",
    "Law Department",
];

static DEPARTMENT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEPARTMENTS.into_iter().collect());

/// Returns `true` iff `candidate` is exactly one of [`DEPARTMENTS`].
pub fn is_known_department(candidate: &str) -> bool {
    DEPARTMENT_SET.contains(candidate)
}

/// Validate a department filter value.
///
/// Returns [`CoreError::Validation`] with [`UNKNOWN_DEPARTMENT_MESSAGE`] when
/// the value is not on the allow-list.
pub fn validate_department(candidate: &str) -> Result<(), CoreError> {
    if is_known_department(candidate) {
        Ok(())
    } else {
        Err(CoreError::Validation(UNKNOWN_DEPARTMENT_MESSAGE.to_string()))
    }
}
