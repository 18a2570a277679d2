//! Resource descriptions and the list query model.
//!
//! This module defines the [`Resource`] trait, which describes how one
//! backend resource type is listed and fetched: its collection endpoint,
//! pagination parameter names, search-field mapping and default page size.
//! A [`ResourceStore`](crate::store::ResourceStore) is instantiated once per
//! implementing type.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use staffdir::resources::Resource;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Project {
//!     id: String,
//!     name: String,
//! }
//!
//! impl Resource for Project {
//!     const NAME: &'static str = "project";
//!     const COLLECTION: &'static str = "projects";
//!     const PAGE_PARAM: &'static str = "_page";
//!     const LIMIT_PARAM: &'static str = "_limit";
//!     const DEFAULT_LIMIT: u32 = 20;
//!     const SEARCH_PARAMS: &'static [&'static str] = &["name"];
//!     const SCOPE_PARAM: Option<&'static str> = None;
//! }
//! ```

mod document;
mod employee;

pub use document::Document;
pub use employee::{initials_of, Employee};

use serde::{de::DeserializeOwned, Serialize};

/// A backend resource type that can be listed and fetched by id.
///
/// Implementors describe their endpoint and query conventions through
/// associated constants; the generic store derives everything else from
/// them, including the fallback error strings
/// (`Failed to fetch {COLLECTION}` / `Failed to fetch {NAME}`).
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The singular name of the resource (e.g., "employee").
    const NAME: &'static str;

    /// The collection endpoint path (e.g., "employees").
    const COLLECTION: &'static str;

    /// Query parameter carrying the page number.
    const PAGE_PARAM: &'static str;

    /// Query parameter carrying the page size.
    const LIMIT_PARAM: &'static str;

    /// Page size used when a query does not specify one.
    const DEFAULT_LIMIT: u32;

    /// Query parameters a free-text search is bound to.
    ///
    /// Every listed parameter receives the same search string, giving the
    /// backend an OR-style match across those fields.
    const SEARCH_PARAMS: &'static [&'static str];

    /// Optional scoping parameter restricting the list to records related
    /// to another resource (e.g., documents of one employee).
    const SCOPE_PARAM: Option<&'static str>;
}

/// An ephemeral, per-call list query.
///
/// Combines pagination with optional scope and search constraints. Values
/// not set fall back to page 1 and the resource's default page size.
///
/// # Example
///
/// ```rust
/// use staffdir::resources::ListQuery;
///
/// let query = ListQuery::new()
///     .page(2)
///     .limit(25)
///     .search("Ann");
///
/// assert_eq!(query.page_number(), 2);
/// assert_eq!(query.limit_value(), Some(25));
/// assert_eq!(query.search_value(), Some("Ann"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    page: Option<u32>,
    limit: Option<u32>,
    scope: Option<String>,
    search: Option<String>,
}

impl ListQuery {
    /// Creates an empty query: page 1, per-resource default limit, no
    /// scope, no search.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: None,
            limit: None,
            scope: None,
            search: None,
        }
    }

    /// Sets the page number. Values below 1 are treated as 1.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restricts the list to records related to the given resource id.
    ///
    /// Ignored for resource types without a scope parameter.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets a free-text search string.
    ///
    /// Empty strings are treated as no search.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

// Read accessors live in a second impl block so the builder-style setters
// above can keep the field names.
impl ListQuery {
    /// Returns the effective page number (at least 1).
    #[must_use]
    pub fn page_number(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Returns the requested page size, if any.
    #[must_use]
    pub const fn limit_value(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the scope filter, if any.
    #[must_use]
    pub fn scope_value(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Returns the search string, if any non-empty one was set.
    #[must_use]
    pub fn search_value(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Builds the query parameter list for resource type `R`.
    ///
    /// Pagination always appears; scope and search only when present, with
    /// the search string fanned out to every search parameter of `R`.
    #[must_use]
    pub fn params<R: Resource>(&self) -> Vec<(String, String)> {
        let limit = self.limit.unwrap_or(R::DEFAULT_LIMIT).max(1);

        let mut params = vec![
            (R::PAGE_PARAM.to_string(), self.page_number().to_string()),
            (R::LIMIT_PARAM.to_string(), limit.to_string()),
        ];

        if let (Some(key), Some(scope)) = (R::SCOPE_PARAM, self.scope_value()) {
            params.push((key.to_string(), scope.to_string()));
        }

        if let Some(search) = self.search_value() {
            for key in R::SEARCH_PARAMS {
                params.push(((*key).to_string(), search.to_string()));
            }
        }

        params
    }
}
