use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// A terminal board of counters.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Number of counters to start with (overrides the config file)
    #[arg(short = 'n', long, value_name = "N")]
    pub counters: Option<usize>,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error or off
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Load the config file this invocation points at.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(config)
    }

    /// CLI values win over the file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(counters) = self.counters {
            config.counters.initial = counters;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let cli = Cli::try_parse_from(["tally", "-n", "9", "--log-level", "debug"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.counters.initial, 9);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file.is_none());
        assert!(config.ui.mouse);
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn counters_must_be_a_number() {
        assert!(Cli::try_parse_from(["tally", "--counters", "many"]).is_err());
    }
}
