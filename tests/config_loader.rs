use std::fs;

use tally::config::{Config, ConfigError, MAX_INITIAL_COUNTERS};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("tally/config.toml"));
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_load_from_full_file() {
    let (_dir, path) = write_config(
        r#"
[counters]
initial = 10

[ui]
poll_interval_ms = 100
mouse = false

[logging]
level = "debug"
file = "/tmp/tally-test.log"
"#,
    );

    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.counters.initial, 10);
    assert_eq!(config.ui.poll_interval_ms, 100);
    assert!(!config.ui.mouse);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/tally-test.log"))
    );
}

#[test]
fn test_load_from_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[counters\ninitial = ");
    match Config::load_from(&path) {
        Err(err @ ConfigError::ParseError { .. }) => {
            assert!(err.to_string().contains("Failed to parse config file"));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[counters]\ninitial = \"four\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_rejects_huge_seed() {
    let mut config = Config::default();
    config.counters.initial = MAX_INITIAL_COUNTERS + 1;
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("counters.initial"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_poll_interval() {
    let (_dir, path) = write_config("[ui]\npoll_interval_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_rejects_unknown_log_level() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("Unknown log level 'loud'"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_log_level_is_case_insensitive() {
    let mut config = Config::default();
    config.logging.level = "WARN".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_counters_is_allowed() {
    let (_dir, path) = write_config("[counters]\ninitial = 0\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.counters.initial, 0);
}

#[test]
fn test_tick_rate_alias_is_validated() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("ui.poll_interval_ms"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }

    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 50\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.poll_interval_ms, 50);
}

#[test]
fn test_unknown_key_is_parse_error() {
    let (_dir, path) = write_config("[ui]\ntick_rate = 50\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
