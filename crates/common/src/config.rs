use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{ObserverError, ObserverResult};
use crate::types::Vid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub observer: ObserverConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObserverConfig {
    /// Buffer size of the registry event channel
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            event_capacity: default_event_capacity(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_event_capacity() -> usize {
    64
}

impl SystemConfig {
    pub fn from_file(path: impl AsRef<Path>) -> ObserverResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ObserverResult<Self> {
        let config: SystemConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ObserverResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ObserverError::config_validation(
                "logging.level must not be empty",
            ));
        }
        if self.observer.event_capacity == 0 {
            return Err(ObserverError::config_validation(
                "observer.event_capacity must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// A form definition: one entry per field provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Generated when absent
    #[serde(default)]
    pub vid: Option<Vid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleConfig {
    Required,
    MinLength { min: usize },
    MaxLength { max: usize },
    Numeric,
    Email,
    Pattern { pattern: String },
}

impl FormConfig {
    pub fn from_file(path: impl AsRef<Path>) -> ObserverResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ObserverResult<Self> {
        let config: FormConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ObserverResult<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if let Some(vid) = &field.vid {
                if vid.as_str().trim().is_empty() {
                    return Err(ObserverError::config_validation("field vid must not be empty"));
                }
                if !seen.insert(vid.clone()) {
                    return Err(ObserverError::config_validation(format!(
                        "duplicate field vid: {vid}"
                    )));
                }
            }
            field.validate()?;
        }
        Ok(())
    }
}

impl FieldConfig {
    pub fn validate(&self) -> ObserverResult<()> {
        let min = self.rules.iter().find_map(|r| match r {
            RuleConfig::MinLength { min } => Some(*min),
            _ => None,
        });
        let max = self.rules.iter().find_map(|r| match r {
            RuleConfig::MaxLength { max } => Some(*max),
            _ => None,
        });

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ObserverError::config_validation(format!(
                    "field {}: min_length {min} exceeds max_length {max}",
                    self.label()
                )));
            }
        }
        Ok(())
    }

    fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.vid.as_ref().map(Vid::as_str))
            .unwrap_or("<unnamed>")
    }
}
