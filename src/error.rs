use thiserror::Error;

/// Failures talking to the analytics backend.
///
/// These carry the technical detail and are logged; users only ever see the
/// workflow-level [`DashboardError`] message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Backend reported an error: {0}")]
    Backend(String),
}

/// The two failure kinds a workflow surfaces to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// Required input missing; checked before any request is issued.
    #[error("{0}")]
    Validation(String),

    /// Any non-2xx response, transport failure or unreadable body.
    #[error("{0}")]
    Request(String),
}

impl DashboardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Unknown section: '{0}'")]
    UnknownSection(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid stored config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}
