//! Common test providers for observer testing

use async_trait::async_trait;
use form_observer::{Flags, ObserverError, ObserverResult, ValidationProvider, ValidationResult, Vid};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// What `validate()` should do
#[derive(Debug, Clone)]
pub enum Outcome {
    Valid,
    Invalid(&'static str),
    Fail(&'static str),
    /// Fails with the provider's own `ProviderFailed` error
    Rejected(&'static str),
}

/// Provider with fixed flags and a scripted validation outcome that
/// records every call made to it
pub struct MockProvider {
    vid: Vid,
    flags: Flags,
    messages: Vec<String>,
    outcome: Outcome,
    delay: Duration,
    fail_reset: bool,
    applied: Mutex<Vec<ValidationResult>>,
    resets: AtomicUsize,
    validations: AtomicUsize,
}

impl MockProvider {
    pub fn new(vid: &str) -> Self {
        Self {
            vid: Vid::from(vid),
            flags: Flags::initial(),
            messages: Vec::new(),
            outcome: Outcome::Valid,
            delay: Duration::ZERO,
            fail_reset: false,
            applied: Mutex::new(Vec::new()),
            resets: AtomicUsize::new(0),
            validations: AtomicUsize::new(0),
        }
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_messages(mut self, messages: &[&str]) -> Self {
        self.messages = messages.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_delay(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }

    pub fn failing_reset(mut self) -> Self {
        self.fail_reset = true;
        self
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn applied(&self) -> Vec<ValidationResult> {
        self.applied.lock().await.clone()
    }

    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }

    pub fn validation_count(&self) -> usize {
        self.validations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ValidationProvider for MockProvider {
    fn vid(&self) -> &Vid {
        &self.vid
    }

    async fn flags(&self) -> Flags {
        self.flags
    }

    async fn messages(&self) -> Vec<String> {
        self.messages.clone()
    }

    async fn validate(&self) -> ObserverResult<ValidationResult> {
        self.validations.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.outcome {
            Outcome::Valid => Ok(ValidationResult::passed()),
            Outcome::Invalid(message) => Ok(ValidationResult::failed("mock", message)),
            Outcome::Fail(reason) => Err(ObserverError::Other(anyhow::anyhow!(reason))),
            Outcome::Rejected(reason) => {
                Err(ObserverError::provider_failed(self.vid.clone(), reason))
            }
        }
    }

    async fn apply_result(&self, result: &ValidationResult) {
        self.applied.lock().await.push(result.clone());
    }

    async fn reset(&self) -> ObserverResult<()> {
        self.resets.fetch_add(1, Ordering::SeqCst);
        if self.fail_reset {
            return Err(ObserverError::Other(anyhow::anyhow!("reset refused")));
        }
        Ok(())
    }
}

/// Flags with `invalid` set to the negation of `valid`, the rest `false`
pub fn flags(pristine: bool, dirty: bool, valid: bool) -> Flags {
    Flags {
        pristine,
        dirty,
        valid,
        invalid: !valid,
        ..Flags::default()
    }
}
