//! Integration tests for configuration validation

#![allow(clippy::expect_used)]

use message_framing::config::{FramingConfig, LoggingConfig};
use message_framing::Padding;
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = FramingConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
}

#[test]
fn test_default_padding_is_none() {
    let config = FramingConfig::default();
    assert_eq!(config.padding.as_padding(), Padding::NONE);
}

#[test]
fn test_excessive_padding_flagged() {
    let mut config = FramingConfig::default();
    config.padding.pre = 10_000;

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("Pre-padding very large")));
}

#[test]
fn test_zero_max_frame_size() {
    let mut config = FramingConfig::default();
    config.limits.max_frame_size = 0;

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("Max frame size cannot be 0")));
}

#[test]
fn test_max_frame_size_beyond_prefix_range() {
    let mut config = FramingConfig::default();
    config.limits.max_frame_size = (u32::MAX as usize) + 1;

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors
        .iter()
        .any(|e| e.contains("4-byte length prefix")));
}

#[test]
fn test_empty_app_name() {
    let mut config = FramingConfig::default();
    config.logging.app_name = String::new();

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_file_logging_without_path() {
    let mut config = FramingConfig::default();
    config.logging.log_to_file = true;
    config.logging.log_file_path = None;

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("log_file_path")));
}

#[test]
fn test_no_logging_outputs() {
    let mut config = FramingConfig::default();
    config.logging.log_to_console = false;
    config.logging.log_to_file = false;

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors
        .iter()
        .any(|e| e.contains("At least one logging output")));
}

#[test]
fn test_toml_roundtrip() {
    let config = FramingConfig::default_with_overrides(|c| {
        c.padding.pre = 16;
        c.padding.post = 4;
        c.limits.max_frame_size = 1024 * 1024;
        c.logging.log_level = Level::DEBUG;
    });

    let toml = toml::to_string_pretty(&config).expect("config serializes");
    let parsed = FramingConfig::from_toml(&toml).expect("config parses back");

    assert_eq!(parsed.padding.pre, 16);
    assert_eq!(parsed.padding.post, 4);
    assert_eq!(parsed.limits.max_frame_size, 1024 * 1024);
    assert_eq!(parsed.logging.log_level, Level::DEBUG);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let parsed = FramingConfig::from_toml("[padding]\npre = 8\n").expect("partial config parses");

    assert_eq!(parsed.padding.pre, 8);
    assert_eq!(parsed.padding.post, 0);
    assert_eq!(parsed.limits.max_frame_size, message_framing::config::MAX_FRAME_SIZE);
}

#[test]
fn test_invalid_toml_rejected() {
    let result = FramingConfig::from_toml("padding = \"not a table\"");
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    let toml = r#"
[logging]
app_name = "framing"
log_level = "verbose"
log_to_console = true
log_to_file = false
json_format = false
"#;
    let result = FramingConfig::from_toml(toml);
    assert!(result.is_err());
}

#[test]
fn test_example_config_is_parseable() {
    let example = FramingConfig::example_config();
    let parsed = FramingConfig::from_toml(&example).expect("example config parses");
    assert!(parsed.validate().is_empty());
}
