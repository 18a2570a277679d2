//! Client configuration types.
//!
//! This module provides [`StaffdirConfig`] and its builder for configuring
//! the client: where the backend lives and how requests identify themselves.
//! Configuration is instance-based and passed explicitly; there is no global
//! state.
//!
//! # Example
//!
//! ```rust
//! use staffdir::{BaseUrl, StaffdirConfig};
//!
//! let config = StaffdirConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3001").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "http://localhost:3001");
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use crate::error::ConfigError;

/// Configuration for the staffdir client.
///
/// Create instances via [`StaffdirConfig::builder`]. The only required field
/// is the backend base URL; everything else has sensible defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffdirConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl StaffdirConfig {
    /// Returns a new builder for constructing a configuration.
    #[must_use]
    pub const fn builder() -> StaffdirConfigBuilder {
        StaffdirConfigBuilder {
            base_url: None,
            user_agent_prefix: None,
        }
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the optional User-Agent prefix.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for [`StaffdirConfig`].
///
/// # Example
///
/// ```rust
/// use staffdir::{BaseUrl, StaffdirConfig};
///
/// let config = StaffdirConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:3001").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaffdirConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl StaffdirConfigBuilder {
    /// Sets the backend base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets an application prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` was not set.
    pub fn build(self) -> Result<StaffdirConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(StaffdirConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
