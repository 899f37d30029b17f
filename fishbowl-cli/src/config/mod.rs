//! User configuration
//!
//! Read from `~/.config/fishbowl/config.toml` (or `--config`). Every field is
//! optional; a missing file means defaults.
//!
//! ```toml
//! color = true
//!
//! [assign]
//! in_place = false
//! show_matrix = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colorize console output
    pub color: bool,
    pub assign: AssignConfig,
}

/// Defaults for the `assign` command
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssignConfig {
    /// Overwrite the input matrix when no output path is given
    pub in_place: bool,
    /// Print the updated matrix when it is not written to a file
    pub show_matrix: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            assign: AssignConfig::default(),
        }
    }
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            in_place: false,
            show_matrix: true,
        }
    }
}

impl Config {
    /// Load from an explicit path, or the default location if none is given
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Default config location (~/.config/fishbowl/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fishbowl").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.color);
        assert!(!config.assign.in_place);
        assert!(config.assign.show_matrix);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml("color = false\n[assign]\nin_place = true\n").unwrap();

        assert!(!config.color);
        assert!(config.assign.in_place);
        // Unset field keeps its default
        assert!(config.assign.show_matrix);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("color = \"yes\"").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = std::env::temp_dir().join("fishbowl-missing-config-does-not-exist.toml");
        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "fishbowl-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[assign]\nshow_matrix = false\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(config.color);
        assert!(!config.assign.show_matrix);
    }
}
