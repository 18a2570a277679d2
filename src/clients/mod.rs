//! HTTP gateway for backend communication.
//!
//! This module provides the thin HTTP layer the resource stores sit on:
//! [`HttpClient`] for issuing GET requests with query parameters, and
//! [`HttpResponse`] for accessing the status, headers and JSON body of the
//! result.

mod errors;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_response::{HttpResponse, TOTAL_COUNT_HEADER};
