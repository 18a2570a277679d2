//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;

/// A validated backend base URL.
///
/// This newtype ensures the URL is an absolute `http` or `https` URL and
/// normalizes away any trailing slashes so request paths can be appended
/// with a single separator.
///
/// # Example
///
/// ```rust
/// use staffdir::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:3001/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:3001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// Trailing slashes are trimmed; the scheme must be `http` or `https`
    /// and a host must follow it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty, has no
    /// http/https scheme, or has no host portion.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() => Ok(Self(trimmed.to_string())),
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(BaseUrl::new("http://localhost:3001").is_ok());
        assert!(BaseUrl::new("https://api.example.com").is_ok());
    }

    #[test]
    fn test_trims_trailing_slashes() {
        let url = BaseUrl::new("http://localhost:3001///").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:3001");
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            BaseUrl::new("localhost:3001"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(BaseUrl::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_rejects_empty_and_bare_scheme() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("https://").is_err());
    }

    #[test]
    fn test_display_matches_as_ref() {
        let url = BaseUrl::new("http://localhost:3001").unwrap();
        assert_eq!(url.to_string(), url.as_ref());
    }
}
