//! # Staffdir Client
//!
//! A Rust client for paginated staff-directory REST backends, providing
//! type-safe configuration, a thin HTTP gateway, and per-resource stores
//! that hold list/detail view state.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StaffdirConfig`] and [`StaffdirConfigBuilder`]
//! - A validated [`BaseUrl`] newtype for the backend location
//! - An async HTTP gateway ([`clients::HttpClient`]) over reqwest
//! - A parametrized [`ResourceStore`] implementing the list-fetch-state
//!   lifecycle, instantiated as [`EmployeeStore`] and [`DocumentStore`]
//! - Presentation projections for employees (display name, initials,
//!   active flag)
//!
//! ## Quick Start
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
//! // List fetches absorb failures into state; poll `error` to react.
//! store.fetch_list(&ListQuery::new().page(1).search("Ann")).await;
//! println!("{} of {} employees", store.items().len(), store.total());
//!
//! // Detail fetches also re-signal the failure to the caller.
//! if store.fetch_one("17").await.is_err() {
//!     eprintln!("not found: {:?}", store.error());
//! }
//! println!("{}", store.current_full_name());
//! ```
//!
//! ## Response shapes
//!
//! The backend may paginate either via an envelope body
//! (`{"data": [...], "items": <count>}`) or via a bare array with the total
//! in an `x-total-count` header. Stores accept both; see [`store`] for the
//! exact normalization rules.
//!
//! ## Design Principles
//!
//! - **No global state**: stores are constructed explicitly and
//!   dependency-injected, so tests can instantiate isolated instances
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **Thread-safe**: stores are `Send + Sync` and shareable via `Arc`
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod store;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, StaffdirConfig, StaffdirConfigBuilder};
pub use error::ConfigError;
pub use resources::{initials_of, Document, Employee, ListQuery, Resource};
pub use store::{DocumentStore, EmployeeStore, ResourceState, ResourceStore, StoreError};
