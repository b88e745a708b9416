//! Client Configuration

use serde::{Deserialize, Serialize};

use crate::error::{TodoError, TodoResult};

/// GraphQL endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/admin/api";

/// Connection settings for the GraphQL backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl ClientConfig {
    /// Build a config, rejecting endpoints that are not absolute URLs.
    pub fn new(endpoint: impl Into<String>) -> TodoResult<Self> {
        let endpoint = endpoint.into();
        let trimmed = endpoint.trim();
        reqwest::Url::parse(trimmed).map_err(|e| TodoError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            endpoint: trimmed.to_string(),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
