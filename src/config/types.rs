use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::counters::DEFAULT_COUNTER_COUNT;

/// Root configuration container. Unknown keys are rejected so a typo
/// surfaces as a parse error instead of a silently kept default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub counters: CountersConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the counter board is seeded at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountersConfig {
    /// Number of counters created at startup (default: 4).
    #[serde(default = "default_initial_counters")]
    pub initial: usize,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// How long the input thread waits for an event before re-checking
    /// the shutdown flag, in milliseconds (default: 250).
    #[serde(default = "default_poll_interval_ms", alias = "tick_rate_ms")]
    pub poll_interval_ms: u64,
    /// Capture mouse clicks on the controls (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Log output settings. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`, `off` (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path (default: `<cache_dir>/tally/tally.log`).
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_initial_counters() -> usize {
    DEFAULT_COUNTER_COUNT
}

fn default_poll_interval_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl UiConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tally")
                .join("tally.log")
        })
    }

    pub fn is_off(&self) -> bool {
        self.level.eq_ignore_ascii_case("off")
    }
}

impl Default for CountersConfig {
    fn default() -> Self {
        Self {
            initial: default_initial_counters(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.counters.initial, 4);
        assert_eq!(config.ui.poll_interval(), Duration::from_millis(250));
        assert!(config.ui.mouse);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_fill_missing_fields() {
        let config: Config = toml::from_str(
            r#"
[counters]
initial = 7

[ui]
mouse = false
"#,
        )
        .unwrap();
        assert_eq!(config.counters.initial, 7);
        assert!(!config.ui.mouse);
        assert_eq!(config.ui.poll_interval_ms, 250);
    }

    #[test]
    fn tick_rate_is_accepted_as_poll_interval() {
        let config: Config = toml::from_str("[ui]\ntick_rate_ms = 40\n").unwrap();
        assert_eq!(config.ui.poll_interval_ms, 40);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("[ui]\npoll_ms = 40\n").is_err());
        assert!(toml::from_str::<Config>("[display]\nmouse = true\n").is_err());
    }

    #[test]
    fn explicit_log_file_wins() {
        let logging = LoggingConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/x.log")),
        };
        assert_eq!(logging.file_path(), PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn default_log_file_lives_under_tally() {
        assert!(LoggingConfig::default().file_path().ends_with("tally/tally.log"));
    }
}
