//! Configuration file support.
//!
//! `types.rs` holds the serde model, `loader.rs` finds, parses and
//! validates the TOML file.

mod loader;
mod types;

pub use loader::{ConfigError, LOG_LEVELS, MAX_INITIAL_COUNTERS};
pub use types::{Config, CountersConfig, LoggingConfig, UiConfig};
