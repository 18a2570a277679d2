//! HTTP-specific error types for the gateway.
//!
//! This module contains error types for HTTP operations: non-2xx responses
//! and network-level failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use staffdir::clients::{HttpClient, HttpError};
//!
//! match client.get("employees", None).await {
//!     Ok(response) => println!("Body: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("Status {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message follows the gateway convention
/// `Request failed with status code {code}`, which is the text surfaced
/// verbatim by the stores when a fetch fails.
///
/// # Example
///
/// ```rust
/// use staffdir::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Request failed with status code 404".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Request failed with status code 404");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable failure message.
    pub message: String,
}

impl HttpResponseError {
    /// Creates a response error for the given status code with the
    /// conventional message text.
    #[must_use]
    pub fn for_status(code: u16) -> Self {
        Self {
            code,
            message: format!("Request failed with status code {code}"),
        }
    }
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for gateway operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
