use thiserror::Error;

use crate::types::Vid;

/// Core error type for all observer failures
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ObserverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration validation failed: {details}")]
    ConfigValidation { details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid rule on {vid}: {reason}")]
    InvalidRule { vid: Vid, reason: String },

    #[error("Provider validation failed - {vid}: {reason}")]
    ProviderFailed { vid: Vid, reason: String },

    #[error("Reset failed for {} provider(s): {}", .failures.len(), summarize(.failures))]
    ResetFailed { failures: Vec<(Vid, String)> },

    #[error("Tracing initialization failed: {0}")]
    Tracing(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

fn summarize(failures: &[(Vid, String)]) -> String {
    failures
        .iter()
        .map(|(vid, reason)| format!("{vid}: {reason}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ObserverError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a configuration validation error
    pub fn config_validation(details: impl Into<String>) -> Self {
        Self::ConfigValidation {
            details: details.into(),
        }
    }

    /// Create a provider failure for the given identifier
    pub fn provider_failed(vid: impl Into<Vid>, reason: impl Into<String>) -> Self {
        Self::ProviderFailed {
            vid: vid.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid rule error for the given identifier
    pub fn invalid_rule(vid: impl Into<Vid>, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            vid: vid.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error came from a provider rather than from setup
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Self::ProviderFailed { .. } | Self::ResetFailed { .. })
    }

    /// Check if error is critical (the observer cannot be built)
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::ConfigValidation { .. } | Self::InvalidRule { .. }
        )
    }
}

pub type ObserverResult<T> = std::result::Result<T, ObserverError>;
