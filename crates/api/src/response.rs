//! Shared response envelope for every API response.
//!
//! Success and error responses alike are rendered as
//! `{ "date": "DD-MM-YYYY", "data": ..., "notes": "No notes added." }`
//! through [`respond`]; only the payload and status code differ.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `strftime` pattern for the envelope `date` field.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Constant value of the envelope `notes` field.
pub const NOTES: &str = "No notes added.";

/// Standard `{ "date", "data", "notes" }` response envelope.
///
/// Field declaration order is the serialized order.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub date: String,
    pub data: T,
    pub notes: &'static str,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap `data`, stamping it with today's local date.
    pub fn new(data: T) -> Self {
        Self {
            date: today(),
            data,
            notes: NOTES,
        }
    }
}

/// Today's local date in `DD-MM-YYYY` form.
pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// Render `payload` inside an [`Envelope`] with the given status code.
pub fn respond<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(Envelope::new(payload))).into_response()
}
