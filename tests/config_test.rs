//! Tests for AppConfig loading and overrides.

use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

use guryongtu::AppConfig;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(*config.game().result_dwell_secs(), 3.0);
    assert!(!*config.game().click_through());
    assert_eq!(*config.game().seed(), None);
    assert!(*config.background().enabled());
    assert_eq!(config.background().api_key_env(), "NASA_API_KEY");
    assert_eq!(config.logging().filter(), "info");

    let machine = config.machine_config().expect("Default config is valid");
    assert_eq!(*machine.result_dwell(), Duration::from_secs(3));
    assert!(!*machine.click_through());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("guryongtu.toml");
    fs::write(
        &path,
        r#"
[game]
result_dwell_secs = 1.5
click_through = true
seed = 42

[background]
enabled = false
"#,
    )
    .expect("Failed to write TOML");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.game().seed(), Some(42));
    assert!(!*config.background().enabled());
    assert_eq!(*config.background().timeout_secs(), 5);
    assert_eq!(config.logging().filter(), "info");

    let machine = config.machine_config().expect("Valid config");
    assert_eq!(*machine.result_dwell(), Duration::from_millis(1500));
    assert!(*machine.click_through());
}

#[test]
fn test_negative_dwell_rejected() {
    let err = AppConfig::from_toml_str("[game]\nresult_dwell_secs = -1.0\n").unwrap_err();
    assert!(err.message.contains("result_dwell_secs"));
}

#[test]
fn test_malformed_toml_rejected() {
    let err = AppConfig::from_toml_str("[game\nseed = 1").unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.toml");
    assert!(AppConfig::load(Some(Path::new(&missing))).is_err());
}

#[test]
fn test_cli_overrides() {
    let mut config = AppConfig::default();
    config.set_seed(7);
    config.enable_click_through();
    config.disable_background();
    config.set_result_dwell_secs(0.25).expect("Valid dwell");

    assert_eq!(*config.game().seed(), Some(7));
    assert!(!*config.background().enabled());
    let machine = config.machine_config().expect("Valid config");
    assert_eq!(*machine.result_dwell(), Duration::from_millis(250));
    assert!(*machine.click_through());

    assert!(config.set_result_dwell_secs(f64::NAN).is_err());
}
