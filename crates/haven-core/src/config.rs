//! Client configuration.
//!
//! The only setting the client needs is the base URL of the Link Haven REST
//! backend. Front ends resolve it from the environment first and fall back to
//! their own persisted configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable holding the backend base URL
pub const API_BASE_URL_ENV: &str = "LINK_HAVEN_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_api_base_url(api_base_url.into())?,
        })
    }

    /// Resolve config from `LINK_HAVEN_API_BASE_URL`, then `fallback`.
    pub fn resolve(fallback: Option<String>) -> Result<Self> {
        let from_env = normalize_text_option(std::env::var(API_BASE_URL_ENV).ok());
        let Some(base_url) = from_env.or_else(|| normalize_text_option(fallback)) else {
            return Err(Error::Config(format!(
                "API base URL is not configured. Set {API_BASE_URL_ENV} or run `haven config init --api-base-url <URL>`."
            )));
        };
        Self::new(base_url)
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Absolute URL for an `/api/...` path
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

/// Trim, require an http(s) scheme, and strip trailing slashes.
pub fn normalize_api_base_url(raw: String) -> Result<String> {
    let base_url = normalize_text_option(Some(raw))
        .ok_or_else(|| Error::Config("API base URL must not be empty".to_string()))?;
    if !is_http_url(&base_url) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base_url.trim_end_matches('/').to_string())
}

/// Normalize optional text by trimming whitespace and removing empties.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("http://") || value.starts_with("https://")
}
