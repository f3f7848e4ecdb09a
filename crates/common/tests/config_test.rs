use form_observer_common::config::{FormConfig, RuleConfig, SystemConfig};
use form_observer_common::error::ObserverError;
use form_observer_common::types::Vid;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_load_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("test_config.toml");

    let config_content = r#"
[logging]
level = "debug"

[observer]
event_capacity = 16
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = SystemConfig::from_file(&config_path).unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.observer.event_capacity, 16);
}

#[test]
fn test_config_defaults_when_sections_missing() {
    let config = SystemConfig::from_toml("").unwrap();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.observer.event_capacity, 64);
}

#[test]
fn test_config_validation_zero_capacity() {
    let config_content = r#"
[observer]
event_capacity = 0
"#;

    let result = SystemConfig::from_toml(config_content);
    assert!(matches!(result, Err(ObserverError::ConfigValidation { .. })));
}

#[test]
fn test_config_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = SystemConfig::from_file(temp_dir.path().join("nope.toml"));

    assert!(matches!(result, Err(ObserverError::Io(_))));
}

#[test]
fn test_form_load_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let form_path = temp_dir.path().join("form.toml");

    let form_content = r#"
[[fields]]
vid = "email"
name = "E-mail"
value = "someone@example.com"
rules = [{ rule = "required" }, { rule = "email" }]

[[fields]]
value = "hunter2"
rules = [{ rule = "min_length", min = 8 }, { rule = "pattern", pattern = "[0-9]" }]
"#;

    fs::write(&form_path, form_content).unwrap();

    let form = FormConfig::from_file(&form_path).unwrap();

    assert_eq!(form.fields.len(), 2);
    assert_eq!(form.fields[0].vid, Some(Vid::from("email")));
    assert_eq!(form.fields[0].rules, vec![RuleConfig::Required, RuleConfig::Email]);
    assert!(form.fields[1].vid.is_none());
    assert_eq!(
        form.fields[1].rules,
        vec![
            RuleConfig::MinLength { min: 8 },
            RuleConfig::Pattern {
                pattern: "[0-9]".to_string()
            },
        ]
    );
}

#[test]
fn test_form_rejects_duplicate_vids() {
    let form_content = r#"
[[fields]]
vid = "name"

[[fields]]
vid = "name"
"#;

    let result = FormConfig::from_toml(form_content);
    assert!(matches!(result, Err(ObserverError::ConfigValidation { .. })));
}

#[test]
fn test_form_rejects_inverted_length_bounds() {
    let form_content = r#"
[[fields]]
vid = "nickname"
rules = [{ rule = "min_length", min = 10 }, { rule = "max_length", max = 3 }]
"#;

    let err = FormConfig::from_toml(form_content).unwrap_err();
    assert!(err.to_string().contains("nickname"));
}

#[test]
fn test_form_rejects_unknown_rule() {
    let form_content = r#"
[[fields]]
vid = "age"
rules = [{ rule = "between" }]
"#;

    let result = FormConfig::from_toml(form_content);
    assert!(matches!(result, Err(ObserverError::TomlError(_))));
}
