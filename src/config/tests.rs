//! Configuration tests
//!
//! Round-trips guard the TOML template: every field written by `to_toml()`
//! must parse back into the same value.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.endpoint = "http://classifier.internal:8000".to_string();
    config.request_timeout_secs = 15;
    config.theme = "plain".to_string();
    config.presenter.emphasis_threshold = 120;
    config.presenter.single_flight = false;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file = Config::parse_file_config(&config.to_toml()).unwrap();
    let reloaded = Config::merge(file, no_env);

    assert_eq!(reloaded.endpoint, config.endpoint);
    assert_eq!(reloaded.request_timeout_secs, 15);
    assert_eq!(reloaded.theme, "plain");
    assert_eq!(reloaded.presenter, config.presenter);
    assert!(reloaded.logging.file_enabled);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::merge(FileConfig::default(), no_env);
    let defaults = Config::default();

    assert_eq!(config.endpoint, defaults.endpoint);
    assert_eq!(config.predict_path, "/predict");
    assert_eq!(config.request_timeout(), None);
    assert_eq!(config.presenter.emphasis_threshold, 200);
    assert_eq!(config.presenter.toast_duration_ms, 3000);
    assert!(!config.demo_mode);
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
endpoint = "http://from-file:5000"
request_timeout_secs = 10
theme = "plain"
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("MOODSCOPE_ENDPOINT", "http://from-env:9000"),
        ("MOODSCOPE_TIMEOUT", "3"),
        ("MOODSCOPE_DEMO", "true"),
    ]);
    let config = Config::merge(file, env);

    assert_eq!(config.endpoint, "http://from-env:9000");
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(3)));
    assert_eq!(config.theme, "plain", "file wins when env is unset");
    assert!(config.demo_mode);
}

#[test]
fn test_invalid_timeout_env_falls_back_to_file() {
    let file = Config::parse_file_config("request_timeout_secs = 7").unwrap();
    let config = Config::merge(file, env_from(&[("MOODSCOPE_TIMEOUT", "soon")]));
    assert_eq!(config.request_timeout_secs, 7);
}

#[test]
fn test_partial_presenter_section() {
    let file = Config::parse_file_config(
        r#"
[presenter]
single_flight = false
"#,
    )
    .unwrap();
    let config = Config::merge(file, no_env);

    assert!(!config.presenter.single_flight);
    assert_eq!(config.presenter.excerpt_len, 60);
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::from_name("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::from_name("NEVER"), LogRotation::Never);
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file_config("endpoint = ").is_err());
    assert!(Config::parse_file_config("request_timeout_secs = \"ten\"").is_err());
}
