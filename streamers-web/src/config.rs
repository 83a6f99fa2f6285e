//! API configuration
//!
//! The API base URL is fixed at build time through `STREAMERS_API_URL`,
//! falling back to the public brstreamers server.

use thiserror::Error;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://brstreamers.dev:8000";

/// Configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API base URL {0:?}: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

/// Where the public API lives
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Validate and normalise a base URL (trailing slashes are dropped).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Config baked in at build time, or the default on absence or error.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("STREAMERS_API_URL"))
    }

    fn resolve(value: Option<&str>) -> Self {
        match value {
            Some(url) => Self::new(url).unwrap_or_else(|e| {
                warn!("{e}; falling back to {DEFAULT_API_URL}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tags_url(&self) -> String {
        self.endpoint("/public/tags")
    }

    pub fn streams_url(&self) -> String {
        self.endpoint("/public/streams")
    }

    pub fn vods_url(&self) -> String {
        self.endpoint("/public/vods")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
