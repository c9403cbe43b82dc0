use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::logging::LogDestination;

/// Picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILENAME: &str = "wordfreq.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_destination: LogDestination,
    /// Any `log::LevelFilter` name: off, error, warn, info, debug, trace.
    pub log_level: String,
    /// Encoding label used when the command line does not name one.
    pub default_encoding: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_destination: LogDestination::Terminal,
            log_level: "info".to_string(),
            default_encoding: None,
        }
    }
}

/// Load the explicit config file (errors are fatal) or the implicit one
/// (absent means defaults, broken means a warning and defaults).
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => Ok(load_optional(Path::new(DEFAULT_CONFIG_FILENAME))),
    }
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read config {:?}", path))?;
    parse_config(&content).with_context(|| format!("failed to parse config {:?}", path))
}

// The logger is not up yet while the config is loaded, hence eprintln.
fn load_optional(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            eprintln!("Warning: Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match parse_config(&content) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

fn parse_config(content: &str) -> Result<AppConfig> {
    Ok(ron::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::{load_config, load_optional, parse_config, AppConfig};
    use crate::logging::LogDestination;
    use tempfile::TempDir;

    #[test]
    fn full_config_parses() {
        let config = parse_config(
            r#"(log_destination: both, log_level: "debug", default_encoding: Some("euc-kr"))"#,
        )
        .unwrap();
        assert_eq!(
            config,
            AppConfig {
                log_destination: LogDestination::Both,
                log_level: "debug".to_string(),
                default_encoding: Some("euc-kr".to_string()),
            }
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = parse_config(r#"(log_level: "warn")"#).unwrap();
        assert_eq!(config.log_destination, LogDestination::Terminal);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.default_encoding, None);
    }

    #[test]
    fn broken_config_is_rejected() {
        assert!(parse_config("(log_destination: nowhere)").is_err());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config(Some(&temp.path().join("absent.ron"))).unwrap_err();
        assert!(err.to_string().contains("absent.ron"));
    }

    #[test]
    fn implicit_config_is_optional() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_optional(&temp.path().join("absent.ron")), AppConfig::default());

        let broken = temp.path().join("broken.ron");
        std::fs::write(&broken, "not ron at all (").unwrap();
        assert_eq!(load_optional(&broken), AppConfig::default());
    }
}
