//! Shared helpers for API integration tests.
//!
//! Tests drive the real router (with its middleware stack) through
//! `tower::ServiceExt::oneshot`, backed by [`MemoryStore`] instead of
//! PostgreSQL.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use remuneration_api::app::build_app;
use remuneration_api::state::AppState;
use remuneration_core::types::DbId;
use remuneration_db::models::employee::{Employee, NewEmployee};
use remuneration_db::store::{EmployeeStore, StoreError};
use rust_decimal::Decimal;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// In-memory [`EmployeeStore`] that counts every query it receives and can be
/// switched into failing, panicking or slow modes.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Employee>>,
    next_id: AtomicUsize,
    queries: AtomicUsize,
    failing: AtomicBool,
    panicking: AtomicBool,
    delay_ms: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of store operations performed so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Make every subsequent operation fail with a storage error.
    pub fn fail_queries(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent operation panic.
    pub fn panic_on_queries(&self) {
        self.panicking.store(true, Ordering::SeqCst);
    }

    /// Delay every subsequent operation by `delay`.
    pub fn delay_queries(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    async fn begin(&self) -> Result<(), StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let delay_ms = self.delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        if self.panicking.load(Ordering::SeqCst) {
            panic!("store exploded");
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Storage(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn create(&self, employee: &NewEmployee) -> Result<DbId, StoreError> {
        self.begin().await?;
        let id = (self.next_id.fetch_add(1, Ordering::SeqCst) + 1) as DbId;
        self.rows.lock().unwrap().push(employee.clone().with_id(id));
        Ok(id)
    }

    async fn get(&self, id: DbId) -> Result<Employee, StoreError> {
        self.begin().await?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        self.begin().await?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_by_department(&self, department: &str) -> Result<Vec<Employee>, StoreError> {
        self.begin().await?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.department == department)
            .cloned()
            .collect())
    }

    async fn update(&self, employee: &Employee) -> Result<bool, StoreError> {
        self.begin().await?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|e| e.id == employee.id) {
            Some(row) => {
                *row = employee.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.begin().await?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn new_employee(name: &str, department: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        department: department.to_string(),
        title: "Clerk".to_string(),
        remuneration: Decimal::new(8_000_000, 2),
        expenses: Decimal::new(12_050, 2),
        year: 2017,
    }
}

/// Build the full application router over `store`.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_test_app_with_timeout(store, Duration::from_secs(30))
}

/// Build the application router over `store` with a custom request timeout.
pub fn build_test_app_with_timeout(store: Arc<MemoryStore>, timeout: Duration) -> Router {
    build_app(AppState::new(store), timeout)
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, "GET", uri).await
}

/// Send a bodyless request with an arbitrary method.
pub async fn send(app: Router, method: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert `json` is an envelope with exactly `date`, `data` and `notes`.
pub fn assert_envelope(json: &serde_json::Value) {
    let object = json.as_object().expect("envelope should be a JSON object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["data", "date", "notes"]);
    assert_eq!(json["notes"], "No notes added.");
    assert_eq!(json["date"].as_str().map(str::len), Some(10));
}
