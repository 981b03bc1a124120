//! Configuration management for metar-reader.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MetarError, Result};

/// Command-line arguments for metar-reader
#[derive(Parser, Debug)]
#[command(name = "metar-reader")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "METAR_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "METAR_PORT")]
    pub port: Option<u16>,

    /// Directory holding index.html and the js/ folder
    #[arg(short, long, env = "METAR_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "METAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "METAR_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Static asset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding index.html and the js/ folder
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Static asset configuration
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment variables
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(dir) = args.assets_dir {
            config.assets.dir = dir;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server = other.server;
        self.assets = other.assets;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(MetarError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // 0 would bind a random port
        if self.server.port == 0 {
            return Err(MetarError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.assets.dir.as_os_str().is_empty() {
            return Err(MetarError::Config {
                message: "Assets directory cannot be empty".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(MetarError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            assets: AssetsConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn empty_args() -> Args {
        Args {
            host: None,
            port: None,
            assets_dir: None,
            config: None,
            log_level: None,
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.assets.dir, PathBuf::from("assets"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_merge() {
        let mut config1 = Config::default();
        let mut config2 = Config::default();

        config2.server.port = 9000;
        config2.assets.dir = PathBuf::from("/srv/metar");

        config1.merge(config2);

        assert_eq!(config1.server.port, 9000);
        assert_eq!(config1.assets.dir, PathBuf::from("/srv/metar"));
    }

    #[test]
    fn test_args_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"server": {{"host": "0.0.0.0", "port": 9100}}, "log_level": "debug"}}"#
        )
        .unwrap();

        let args = Args {
            port: Some(9200),
            config: Some(file.path().to_path_buf()),
            ..empty_args()
        };
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9200);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.assets.dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_missing_config_file() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/metar-reader.json")),
            ..empty_args()
        };
        assert!(matches!(Config::from_args(args), Err(MetarError::Io(_))));
    }

    #[test]
    fn test_invalid_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..empty_args()
        };
        assert!(matches!(Config::from_args(args), Err(MetarError::Json(_))));
    }

    #[test]
    fn test_config_validation() {
        // Valid config should pass
        let config = Config::default();
        assert!(config.validate().is_ok());

        // Test invalid host
        let mut config = Config::default();
        config.server.host = "".to_string();
        assert!(config.validate().is_err());

        // Test invalid port
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        // Test invalid assets directory
        let mut config = Config::default();
        config.assets.dir = PathBuf::new();
        assert!(config.validate().is_err());

        // Test invalid log level
        let mut config = Config::default();
        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }
}
