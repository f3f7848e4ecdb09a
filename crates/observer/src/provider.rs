//! The capability set an observer needs from each provider

use async_trait::async_trait;
use form_observer_common::{ObserverResult, Vid};
use serde::{Deserialize, Serialize};

use crate::flags::Flags;

/// Outcome of a single provider validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,

    /// Messages for every failed rule, in rule order
    #[serde(default)]
    pub errors: Vec<String>,

    /// Names of the rules that failed
    #[serde(default)]
    pub failed_rules: Vec<String>,
}

impl ValidationResult {
    pub fn passed() -> Self {
        Self {
            valid: true,
            ..Self::default()
        }
    }

    pub fn failed(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![message.into()],
            failed_rules: vec![rule.into()],
        }
    }

    /// Record another failed rule. Marks the result invalid.
    pub fn with_failure(mut self, rule: impl Into<String>, message: impl Into<String>) -> Self {
        self.valid = false;
        self.failed_rules.push(rule.into());
        self.errors.push(message.into());
        self
    }
}

/// Anything that tracks its own validation state and can be observed.
///
/// Handles are shared as `Arc<dyn ValidationProvider>`, so mutators take
/// `&self` and implementations keep their state behind a lock.
#[async_trait]
pub trait ValidationProvider: Send + Sync {
    fn vid(&self) -> &Vid;

    async fn flags(&self) -> Flags;

    async fn messages(&self) -> Vec<String>;

    /// Run validation without touching provider state
    async fn validate(&self) -> ObserverResult<ValidationResult>;

    async fn apply_result(&self, result: &ValidationResult);

    async fn reset(&self) -> ObserverResult<()>;
}
