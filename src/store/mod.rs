//! Resource stores: per-resource list/detail state over the HTTP gateway.
//!
//! This module provides [`ResourceStore<R>`], the single parametrized
//! implementation of the list-fetch-state lifecycle: build a paginated
//! query, issue one GET, normalize the response shape, and expose
//! loading/error/data state. One store is instantiated per resource type
//! and holds the only mutable truth about that resource's view state.
//!
//! # Response shapes
//!
//! The backend may paginate via envelope or via header convention, and the
//! store accepts both:
//!
//! - **Envelope**: `{"data": [...], "items": <count>}` — `data` is the item
//!   list and `items` the total count (non-numeric or missing counts coerce
//!   to 0).
//! - **Bare array**: `[...]` — the whole body is the item list and the total
//!   comes from the `x-total-count` header, falling back to the list length.
//!
//! # Example
//!
//! ```rust,ignore
//! use staffdir::{BaseUrl, EmployeeStore, ListQuery, StaffdirConfig};
//!
//! let config = StaffdirConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3001").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let store = EmployeeStore::from_config(&config);
//!
//! store.fetch_list(&ListQuery::new().page(1).search("Ann")).await;
//! if let Some(error) = store.error() {
//!     eprintln!("fetch failed: {error}");
//! } else {
//!     println!("{} of {} employees", store.items().len(), store.total());
//! }
//! ```

mod errors;

pub use errors::StoreError;

use std::fmt::Display;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::clients::{HttpClient, HttpResponse};
use crate::config::StaffdirConfig;
use crate::resources::{Document, Employee, ListQuery, Resource};

/// Store over [`Employee`] records.
pub type EmployeeStore = ResourceStore<Employee>;

/// Store over [`Document`] records.
pub type DocumentStore = ResourceStore<Document>;

/// View state held by a store for one resource type.
///
/// `Default` is the documented empty state: no items, no current record,
/// zero total, not loading, no error.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<R> {
    /// The current page's results; replaced wholesale on each successful
    /// list fetch.
    pub items: Vec<R>,
    /// The most recently fetched detail record; independent of `items`.
    pub current: Option<R>,
    /// Total count of items matching the last list query.
    pub total: u64,
    /// True strictly between request-issued and request-settled.
    pub loading: bool,
    /// Message of the last failed operation; cleared on the next attempt
    /// or explicit clear.
    pub error: Option<String>,
}

impl<R> Default for ResourceState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            total: 0,
            loading: false,
            error: None,
        }
    }
}

/// A store mediating between callers and the backend for one resource type.
///
/// The store owns its state behind a lock, so one instance can be shared
/// (e.g., via `Arc`) for the lifetime of an application session while tests
/// construct isolated instances. The lock is never held across a network
/// await: concurrent calls race, and whichever response settles last wins,
/// including the final `loading` value.
///
/// # Thread Safety
///
/// `ResourceStore<R>` is `Send + Sync` for any `R: Resource`.
#[derive(Debug)]
pub struct ResourceStore<R: Resource> {
    client: HttpClient,
    state: RwLock<ResourceState<R>>,
}

// Verify stores are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EmployeeStore>();
    assert_send_sync::<DocumentStore>();
};

impl<R: Resource> ResourceStore<R> {
    /// Creates a store over the given HTTP client, starting from the empty
    /// state.
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            state: RwLock::new(ResourceState::default()),
        }
    }

    /// Creates a store with its own HTTP client for the given configuration.
    #[must_use]
    pub fn from_config(config: &StaffdirConfig) -> Self {
        Self::new(HttpClient::new(config))
    }

    fn read(&self) -> RwLockReadGuard<'_, ResourceState<R>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ResourceState<R>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of the full state.
    #[must_use]
    pub fn state(&self) -> ResourceState<R> {
        self.read().clone()
    }

    /// Returns a snapshot of the current page's items.
    #[must_use]
    pub fn items(&self) -> Vec<R> {
        self.read().items.clone()
    }

    /// Returns a snapshot of the current detail record, if any.
    #[must_use]
    pub fn current(&self) -> Option<R> {
        self.read().current.clone()
    }

    /// Returns the total count matching the last list query.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.read().total
    }

    /// Returns whether a fetch is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// Returns the message of the last failed operation, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    /// Fetches one page of the resource list into the store.
    ///
    /// Sets `loading`, clears `error`, and issues one GET to the collection
    /// endpoint with pagination, scope and search parameters. On success,
    /// `items` and `total` replace the prior values; on failure the prior
    /// values are left untouched and `error` is set to the failure's message
    /// (or `Failed to fetch {collection}` when it has none). Failures are
    /// never propagated to the caller; `loading` is cleared in all cases.
    pub async fn fetch_list(&self, query: &ListQuery) {
        let params = query.params::<R>();
        tracing::debug!(resource = R::NAME, params = ?params, "fetching list");

        self.begin();
        let result = self.request_list(&params).await;
        let mut state = self.write();
        match result {
            Ok((items, total)) => {
                state.items = items;
                state.total = total;
            }
            Err(error) => {
                tracing::error!(resource = R::NAME, error = %error, "list fetch failed");
                state.error = Some(collapse(
                    &error,
                    &format!("Failed to fetch {}", R::COLLECTION),
                ));
            }
        }
        state.loading = false;
    }

    /// Fetches a single record into `current`.
    ///
    /// Sets `loading`, clears `error`, and issues one GET to the
    /// single-resource endpoint. On success `current` is replaced. On
    /// failure `error` is set (fallback `Failed to fetch {name}`) and,
    /// unlike [`fetch_list`](Self::fetch_list), the failure is also returned
    /// so callers can react immediately (e.g., redirect to a not-found
    /// view). `loading` is cleared in all cases.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] that was also collapsed into `error`.
    pub async fn fetch_one(&self, id: impl Display + Send) -> Result<(), StoreError> {
        let path = format!("{}/{}", R::COLLECTION, id);
        tracing::debug!(resource = R::NAME, path = %path, "fetching record");

        self.begin();
        let result = self.request_one(&path).await;
        let mut state = self.write();
        state.loading = false;
        match result {
            Ok(record) => {
                state.current = Some(record);
                Ok(())
            }
            Err(error) => {
                tracing::error!(resource = R::NAME, error = %error, "record fetch failed");
                state.error = Some(collapse(&error, &format!("Failed to fetch {}", R::NAME)));
                Err(error)
            }
        }
    }

    /// Resets `current` and `error`. Idempotent, no network call.
    pub fn clear_one(&self) {
        let mut state = self.write();
        state.current = None;
        state.error = None;
    }

    /// Resets `items`, `total` and `error`. Idempotent, no network call.
    pub fn clear_list(&self) {
        let mut state = self.write();
        state.items = Vec::new();
        state.total = 0;
        state.error = None;
    }

    /// Marks a fetch as in flight.
    fn begin(&self) {
        let mut state = self.write();
        state.loading = true;
        state.error = None;
    }

    async fn request_list(&self, params: &[(String, String)]) -> Result<(Vec<R>, u64), StoreError> {
        let response = self.client.get(R::COLLECTION, Some(params)).await?;
        normalize_list(&response)
    }

    async fn request_one(&self, path: &str) -> Result<R, StoreError> {
        let response = self.client.get(path, None).await?;
        serde_json::from_value(response.body).map_err(|e| StoreError::Malformed {
            reason: format!("invalid {} record: {e}", R::NAME),
        })
    }
}

/// Collapses a store error into the single state message: the failure's
/// message verbatim when present, the static fallback otherwise.
fn collapse(error: &StoreError, fallback: &str) -> String {
    let message = error.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Normalizes a list response into items and a total count.
///
/// Envelope bodies win over the header convention: whenever a `data` field
/// exists it is the item list and the sibling `items` field the count.
fn normalize_list<R: Resource>(response: &HttpResponse) -> Result<(Vec<R>, u64), StoreError> {
    if let Some(data) = response.body.get("data") {
        let items: Vec<R> =
            serde_json::from_value(data.clone()).map_err(|e| StoreError::Malformed {
                reason: format!("invalid `data` field: {e}"),
            })?;
        let total = response.body.get("items").map_or(0, coerce_count);
        Ok((items, total))
    } else if response.body.is_array() {
        let items: Vec<R> =
            serde_json::from_value(response.body.clone()).map_err(|e| StoreError::Malformed {
                reason: format!("invalid item list: {e}"),
            })?;
        let total = response.total_count().unwrap_or(items.len() as u64);
        Ok((items, total))
    } else {
        Err(StoreError::Malformed {
            reason: "expected an envelope object or a bare array".to_string(),
        })
    }
}

/// Coerces an envelope count field to a number, treating anything
/// non-numeric as 0.
fn coerce_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn response(body: Value) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body)
    }

    fn response_with_total(body: Value, total: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("x-total-count".to_string(), vec![total.to_string()]);
        HttpResponse::new(200, headers, body)
    }

    #[test]
    fn test_envelope_with_numeric_items() {
        let (items, total) = normalize_list::<Employee>(&response(json!({
            "data": [{"id": "1", "firstName": "Ann", "lastName": "Lee"}],
            "items": 57
        })))
        .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(total, 57);
    }

    #[test]
    fn test_envelope_with_string_count_coerces() {
        let (_, total) = normalize_list::<Employee>(&response(json!({
            "data": [],
            "items": "42"
        })))
        .unwrap();
        assert_eq!(total, 42);
    }

    #[test]
    fn test_envelope_with_non_numeric_items_is_zero() {
        let (_, total) = normalize_list::<Employee>(&response(json!({
            "data": [],
            "items": "many"
        })))
        .unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_envelope_with_missing_items_is_zero() {
        let (_, total) = normalize_list::<Employee>(&response(json!({
            "data": []
        })))
        .unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_bare_array_with_header_total() {
        let (items, total) = normalize_list::<Employee>(&response_with_total(
            json!([{"id": "1", "firstName": "Ann", "lastName": "Lee"}]),
            "42",
        ))
        .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(total, 42);
    }

    #[test]
    fn test_bare_array_without_header_falls_back_to_length() {
        let (items, total) = normalize_list::<Employee>(&response(json!([
            {"id": "1", "firstName": "Ann", "lastName": "Lee"},
            {"id": "2", "firstName": "Bob", "lastName": "Orr"}
        ])))
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(total, 2);
    }

    #[test]
    fn test_bare_array_with_invalid_header_falls_back_to_length() {
        let (_, total) =
            normalize_list::<Employee>(&response_with_total(json!([{"id": "1"}]), "lots"))
                .unwrap();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_envelope_wins_over_header() {
        let (_, total) = normalize_list::<Employee>(&response_with_total(
            json!({"data": [], "items": 5}),
            "99",
        ))
        .unwrap();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_neither_shape_is_malformed() {
        let result = normalize_list::<Employee>(&response(json!({"unexpected": true})));
        assert!(matches!(result, Err(StoreError::Malformed { .. })));

        let result = normalize_list::<Employee>(&response(Value::Null));
        assert!(matches!(result, Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_envelope_with_non_array_data_is_malformed() {
        let result = normalize_list::<Employee>(&response(json!({"data": "oops"})));
        assert!(matches!(result, Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_coerce_count_handles_floats_and_negatives() {
        assert_eq!(coerce_count(&json!(12.5)), 0);
        assert_eq!(coerce_count(&json!(-3)), 0);
        assert_eq!(coerce_count(&json!(true)), 0);
        assert_eq!(coerce_count(&json!(7)), 7);
    }

    #[test]
    fn test_collapse_prefers_error_message() {
        let error = StoreError::NotFound {
            code: 404,
            message: "Request failed with status code 404".to_string(),
        };
        assert_eq!(
            collapse(&error, "Failed to fetch employees"),
            "Request failed with status code 404"
        );
    }

    #[test]
    fn test_collapse_falls_back_when_message_empty() {
        let error = StoreError::NotFound {
            code: 404,
            message: String::new(),
        };
        assert_eq!(
            collapse(&error, "Failed to fetch employees"),
            "Failed to fetch employees"
        );
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = ResourceState::<Employee>::default();
        assert!(state.items.is_empty());
        assert!(state.current.is_none());
        assert_eq!(state.total, 0);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }
}
