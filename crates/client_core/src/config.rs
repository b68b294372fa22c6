//! Explicit client configuration: where the backend lives and what it is called.

use shared::{domain::UserId, protocol::{user_route, users_route}};
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const DEFAULT_BACKEND_NAME: &str = "rust";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid api base url {url:?}: {reason}")]
    InvalidApiBase { url: String, reason: String },
    #[error("backend name must be a non-empty single path segment, got {0:?}")]
    InvalidBackendName(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub backend_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            backend_name: DEFAULT_BACKEND_NAME.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(
        api_base: impl Into<String>,
        backend_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            api_base: api_base.into().trim().trim_end_matches('/').to_string(),
            backend_name: backend_name.into().trim().to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base).map_err(|e| ConfigError::InvalidApiBase {
            url: self.api_base.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiBase {
                url: self.api_base.clone(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        if self.backend_name.is_empty()
            || self
                .backend_name
                .contains(|c: char| c == '/' || c == '?' || c == '#' || c.is_whitespace())
        {
            return Err(ConfigError::InvalidBackendName(self.backend_name.clone()));
        }
        Ok(())
    }

    /// `{api_base}/api/{backend}/users`
    pub fn users_url(&self) -> String {
        format!(
            "{}{}",
            self.api_base.trim_end_matches('/'),
            users_route(&self.backend_name)
        )
    }

    /// `{api_base}/api/{backend}/users/{id}`
    pub fn user_url(&self, user_id: UserId) -> String {
        format!(
            "{}{}",
            self.api_base.trim_end_matches('/'),
            user_route(&self.backend_name, user_id)
        )
    }
}
