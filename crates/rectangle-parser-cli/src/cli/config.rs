//! CLI configuration.
//!
//! An optional YAML file supplies defaults the command line can override:
//!
//! ```yaml
//! default_file: shapes/rectangles.xml
//! verbose: false
//! ```
//!
//! `rectangle-parser.yaml` in the working directory is picked up when
//! present; `--config <PATH>` points somewhere else and must exist.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// File looked for in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "rectangle-parser.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File `parse` reads when no filename is given
    pub default_file: PathBuf,

    /// Always list edge points, as if `--verbose` were passed
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from("rectangles.xml"),
            verbose: false,
        }
    }
}

impl Config {
    /// Load from `explicit`, else from [`CONFIG_FILE`] if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let implicit = Path::new(CONFIG_FILE);
                if implicit.is_file() {
                    Self::from_file(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.default_file, PathBuf::from("rectangles.xml"));
        assert!(!config.verbose);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("verbose: true\n").unwrap();
        assert!(config.verbose);
        assert_eq!(config.default_file, PathBuf::from("rectangles.xml"));
    }

    #[test]
    fn full_yaml() {
        let config = Config::from_yaml("default_file: shapes/all.xml\nverbose: false\n").unwrap();
        assert_eq!(config.default_file, PathBuf::from("shapes/all.xml"));
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn bad_yaml_is_an_error() {
        assert!(Config::from_yaml("verbose: [not, a, bool]").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = Config::load(Some(Path::new("no/such/config.yaml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn explicit_file_is_read() {
        let path = std::env::temp_dir().join(format!("rectangle-parser-config-{}.yaml", std::process::id()));
        fs::write(&path, "default_file: elsewhere.xml\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.default_file, PathBuf::from("elsewhere.xml"));
    }
}
