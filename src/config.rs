use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::Precision;
use crate::error::Result;

/// File name searched for in the working directory
pub const CONFIG_FILE_NAME: &str = "bukkitversion.toml";

/// Represents the complete configuration for bukkit-version.
///
/// Contains parsing mode, comparison precision and logging options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub parsing: ParsingConfig,

    #[serde(default)]
    pub comparison: ComparisonConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_strict() -> bool {
    true
}

/// Configuration for version string parsing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ParsingConfig {
    /// Require the `-SNAPSHOT` build marker (Bukkit API strings only)
    #[serde(default = "default_strict")]
    pub strict: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        ParsingConfig {
            strict: default_strict(),
        }
    }
}

/// Configuration for version comparison.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ComparisonConfig {
    /// Least significant component compared by default
    #[serde(default)]
    pub precision: Precision,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration for log output.
///
/// `RUST_LOG` takes precedence over `level` when set.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bukkitversion.toml` in current directory
/// 3. `.bukkitversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.parsing.strict);
        assert_eq!(config.comparison.precision, Precision::RevisionMinor);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[comparison]\nprecision = \"patch\"\n").unwrap();
        assert_eq!(config.comparison.precision, Precision::Patch);
        assert!(config.parsing.strict);
    }

    #[test]
    fn test_unknown_precision_rejected() {
        assert!(toml::from_str::<Config>("[comparison]\nprecision = \"build\"\n").is_err());
    }
}
