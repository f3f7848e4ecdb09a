//! Field provider: a single input value checked against a rule list

use async_trait::async_trait;
use form_observer_common::{FieldConfig, ObserverResult, Vid};
use tokio::sync::RwLock;
use tracing::debug;

use crate::flags::Flags;
use crate::provider::{ValidationProvider, ValidationResult};
use crate::rules::Rule;

#[derive(Debug, Clone)]
struct FieldState {
    value: String,
    flags: Flags,
    messages: Vec<String>,
    failed_rules: Vec<String>,
}

impl FieldState {
    fn new(value: String) -> Self {
        Self {
            value,
            flags: Flags::initial(),
            messages: Vec::new(),
            failed_rules: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct FieldProvider {
    vid: Vid,
    name: Option<String>,
    rules: Vec<Rule>,
    initial_value: String,
    state: RwLock<FieldState>,
}

impl FieldProvider {
    pub fn new(vid: impl Into<Vid>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            vid: vid.into(),
            name: None,
            rules: Vec::new(),
            initial_value: value.clone(),
            state: RwLock::new(FieldState::new(value)),
        }
    }

    pub fn from_config(config: &FieldConfig) -> ObserverResult<Self> {
        let vid = config.vid.clone().unwrap_or_default();
        let rules = config
            .rules
            .iter()
            .map(|rule| Rule::from_config(&vid, rule))
            .collect::<ObserverResult<Vec<_>>>()?;

        let mut field = Self::new(vid, config.value.clone()).with_rules(rules);
        field.name = config.name.clone();
        Ok(field)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Display name used in messages, falling back to the vid
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.vid.as_str())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub async fn value(&self) -> String {
        self.state.read().await.value.clone()
    }

    pub async fn failed_rules(&self) -> Vec<String> {
        self.state.read().await.failed_rules.clone()
    }

    /// Change the value. The field is no longer pristine.
    pub async fn set_value(&self, value: impl Into<String>) {
        let mut state = self.state.write().await;
        state.value = value.into();
        state.flags.dirty = true;
        state.flags.pristine = false;
    }

    pub async fn touch(&self) {
        let mut state = self.state.write().await;
        state.flags.touched = true;
        state.flags.untouched = false;
    }

    /// Check `value` against every rule. An empty value of a field that
    /// is not required passes without running the other rules.
    pub fn check(&self, value: &str) -> ValidationResult {
        let required = self.rules.iter().any(|r| matches!(r, Rule::Required));
        if !required && value.is_empty() {
            return ValidationResult::passed();
        }

        self.rules
            .iter()
            .filter(|rule| !rule.check(value))
            .fold(ValidationResult::passed(), |result, rule| {
                result.with_failure(rule.name(), rule.message(self.name()))
            })
    }
}

#[async_trait]
impl ValidationProvider for FieldProvider {
    fn vid(&self) -> &Vid {
        &self.vid
    }

    async fn flags(&self) -> Flags {
        self.state.read().await.flags
    }

    async fn messages(&self) -> Vec<String> {
        self.state.read().await.messages.clone()
    }

    /// Marks the field pending until the result is applied
    async fn validate(&self) -> ObserverResult<ValidationResult> {
        let value = {
            let mut state = self.state.write().await;
            state.flags.pending = true;
            state.value.clone()
        };
        Ok(self.check(&value))
    }

    async fn apply_result(&self, result: &ValidationResult) {
        let mut state = self.state.write().await;
        state.flags.valid = result.valid;
        state.flags.invalid = !result.valid;
        state.flags.validated = true;
        state.flags.pending = false;
        state.messages = result.errors.clone();
        state.failed_rules = result.failed_rules.clone();
        debug!(vid = %self.vid, valid = result.valid, "Field result applied");
    }

    async fn reset(&self) -> ObserverResult<()> {
        *self.state.write().await = FieldState::new(self.initial_value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password() -> FieldProvider {
        FieldProvider::new("password", "")
            .with_rule(Rule::Required)
            .with_rule(Rule::MinLength(8))
            .with_rule(Rule::Numeric)
    }

    #[test]
    fn test_check_collects_every_failed_rule() {
        let result = password().check("abc");

        assert!(!result.valid);
        assert_eq!(result.failed_rules, vec!["min_length", "numeric"]);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_check_empty_optional_field_passes() {
        let field = FieldProvider::new("nickname", "").with_rule(Rule::MinLength(3));
        assert!(field.check("").valid);
        assert!(!field.check("ab").valid);
    }

    #[test]
    fn test_name_falls_back_to_vid() {
        assert_eq!(password().name(), "password");
        assert_eq!(password().with_name("Password").name(), "Password");
    }

    #[tokio::test]
    async fn test_validate_marks_pending_until_applied() {
        let field = password();
        let result = field.validate().await.unwrap();

        assert!(!result.valid);
        assert!(field.messages().await.is_empty());
        let flags = field.flags().await;
        assert!(flags.pending);
        assert!(!flags.validated);
        assert!(!flags.invalid);

        field.apply_result(&result).await;
        let flags = field.flags().await;
        assert!(!flags.pending);
        assert!(flags.validated);
        assert!(flags.invalid);
    }

    #[tokio::test]
    async fn test_reset_clears_pending() {
        let field = password();
        field.validate().await.unwrap();
        field.reset().await.unwrap();

        assert_eq!(field.flags().await, Flags::initial());
    }
}
