//! Built-in validation rules for field providers

use form_observer_common::{ObserverError, ObserverResult, RuleConfig, Vid};
use regex::Regex;
use std::sync::LazyLock;

// local@domain.tld with no whitespace and a single @
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Numeric,
    Email,
    Pattern(Regex),
}

impl Rule {
    /// Compile a configured rule. `vid` names the field in errors.
    pub fn from_config(vid: &Vid, config: &RuleConfig) -> ObserverResult<Self> {
        Ok(match config {
            RuleConfig::Required => Rule::Required,
            RuleConfig::MinLength { min } => Rule::MinLength(*min),
            RuleConfig::MaxLength { max } => Rule::MaxLength(*max),
            RuleConfig::Numeric => Rule::Numeric,
            RuleConfig::Email => Rule::Email,
            RuleConfig::Pattern { pattern } => Rule::Pattern(
                Regex::new(pattern)
                    .map_err(|e| ObserverError::invalid_rule(vid.clone(), e.to_string()))?,
            ),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::MinLength(_) => "min_length",
            Rule::MaxLength(_) => "max_length",
            Rule::Numeric => "numeric",
            Rule::Email => "email",
            Rule::Pattern(_) => "pattern",
        }
    }

    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.trim().is_empty(),
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::MaxLength(max) => value.chars().count() <= *max,
            Rule::Numeric => !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()),
            Rule::Email => EMAIL.is_match(value),
            Rule::Pattern(re) => re.is_match(value),
        }
    }

    pub fn message(&self, field: &str) -> String {
        match self {
            Rule::Required => format!("The {field} field is required."),
            Rule::MinLength(min) => {
                format!("The {field} field must be at least {min} characters.")
            }
            Rule::MaxLength(max) => {
                format!("The {field} field may not be greater than {max} characters.")
            }
            Rule::Numeric => format!("The {field} field may only contain numeric characters."),
            Rule::Email => format!("The {field} field must be a valid email."),
            Rule::Pattern(_) => format!("The {field} field format is invalid."),
        }
    }
}
