//! Error types for resource store operations.

use thiserror::Error;

use crate::clients::HttpError;

/// Errors a store operation can fail with.
///
/// This is the closed taxonomy surfaced by [`fetch_one`]; `fetch_list`
/// absorbs the same kinds into the store's `error` string instead of
/// returning them. Every kind carries the original message and collapses
/// into that message via `Display`, so the state's single `error` field
/// keeps the legacy behavior.
///
/// [`fetch_one`]: crate::store::ResourceStore::fetch_one
#[derive(Debug, Error)]
pub enum StoreError {
    /// The gateway never produced a usable response (connection refused,
    /// DNS failure, timeout).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    NotFound {
        /// The HTTP status code of the response.
        code: u16,
        /// The failure message, surfaced verbatim in store state.
        message: String,
    },

    /// The response body matched neither the envelope nor the bare-array
    /// convention, or a record failed to deserialize.
    #[error("Malformed response: {reason}")]
    Malformed {
        /// What made the body unusable.
        reason: String,
    },
}

impl From<HttpError> for StoreError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Response(e) => Self::NotFound {
                code: e.code,
                message: e.message,
            },
            HttpError::Network(e) => Self::Network(e),
        }
    }
}
