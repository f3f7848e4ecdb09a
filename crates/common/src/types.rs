use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a validation provider inside an observer
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vid(pub String);

impl Vid {
    /// Generate a fresh identifier for providers declared without one
    pub fn new() -> Self {
        Self(format!("_vee_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Vid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Vid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Vid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Vid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Vid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
