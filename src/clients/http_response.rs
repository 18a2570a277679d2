//! HTTP response types for the gateway.
//!
//! This module provides the [`HttpResponse`] type for accessing status,
//! headers and the JSON body of a backend response.

use std::collections::HashMap;

/// Header carrying the total record count for bare-array list responses.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// A parsed HTTP response from the backend.
///
/// Headers are stored lower-cased with all values preserved, so callers can
/// read conventional headers like `x-total-count` without worrying about
/// casing.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use staffdir::clients::HttpResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-total-count".to_string(), vec!["42".to_string()]);
///
/// let response = HttpResponse::new(200, headers, serde_json::json!([]));
/// assert!(response.is_ok());
/// assert_eq!(response.total_count(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased, with all values.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body parsed as JSON.
    ///
    /// Bodies that are not valid JSON are represented as `Value::Null` so
    /// downstream shape detection can classify them as malformed.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response from its parts.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of the given header, if present.
    ///
    /// The lookup is case-insensitive; header names are stored lower-cased.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the total record count from the `x-total-count` header.
    ///
    /// Returns `None` when the header is absent or not a valid integer;
    /// callers fall back to the item list's length in that case.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        self.header(TOTAL_COUNT_HEADER)
            .and_then(|value| value.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers_with(name: &str, value: &str) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        headers
    }

    #[test]
    fn test_is_ok_for_2xx_only() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(301, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(500, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers_with("x-total-count", "7"), json!([]));
        assert_eq!(response.header("X-Total-Count"), Some("7"));
        assert_eq!(response.header("x-total-count"), Some("7"));
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn test_total_count_parses_header() {
        let response = HttpResponse::new(200, headers_with(TOTAL_COUNT_HEADER, "42"), json!([]));
        assert_eq!(response.total_count(), Some(42));
    }

    #[test]
    fn test_total_count_none_for_invalid_header() {
        let response =
            HttpResponse::new(200, headers_with(TOTAL_COUNT_HEADER, "lots"), json!([]));
        assert_eq!(response.total_count(), None);
    }

    #[test]
    fn test_total_count_none_when_header_absent() {
        let response = HttpResponse::new(200, HashMap::new(), json!([]));
        assert_eq!(response.total_count(), None);
    }

    #[test]
    fn test_total_count_tolerates_whitespace() {
        let response = HttpResponse::new(200, headers_with(TOTAL_COUNT_HEADER, " 12 "), json!([]));
        assert_eq!(response.total_count(), Some(12));
    }
}
