//! Settings for the `wkt-scan` tool
//!
//! Values are taken from command-line flags first, then from a TOML config
//! file, then from built-in defaults. The file is the one passed with
//! `--config`, or `wkt-scan.toml` in the working directory if it exists.
//!
//! ```toml
//! max-tokens = 100
//! json = false
//! color = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "wkt-scan.toml";

/// The config file as written on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub max_tokens: Option<usize>,
    #[serde(default)]
    pub json: Option<bool>,
    #[serde(default)]
    pub color: Option<bool>,
}

impl FileConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: FileConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.max_tokens == Some(0) {
            return Err(ConfigError::InvalidMaxTokens {
                path: path.to_path_buf(),
            });
        }
        Ok(config)
    }

    /// Load the explicitly requested file, or `wkt-scan.toml` from `dir`
    /// when present. No file at all yields the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            return Self::load(&candidate);
        }
        Ok(FileConfig::default())
    }
}

/// Flags given on the command line; `None`/`false` means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_tokens: Option<usize>,
    pub json: bool,
    pub config: Option<PathBuf>,
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Maximum tokens per file; None scans everything
    pub max_tokens: Option<usize>,
    pub json: bool,
    /// Colored text output; always off for JSON
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_tokens: None,
            json: false,
            color: true,
        }
    }
}

impl Settings {
    pub fn resolve(file: FileConfig, cli: &CliOverrides) -> Self {
        let defaults = Settings::default();
        let json = cli.json || file.json.unwrap_or(defaults.json);
        Settings {
            max_tokens: cli.max_tokens.or(file.max_tokens),
            json,
            color: !json && file.color.unwrap_or(defaults.color),
        }
    }

    /// Discover the config file relative to `dir` and merge it with `cli`.
    pub fn load(cli: &CliOverrides, dir: &Path) -> Result<Self, ConfigError> {
        let file = FileConfig::discover(cli.config.as_deref(), dir)?;
        Ok(Self::resolve(file, cli))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(&CliOverrides::default(), dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_discovers_file_in_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "max-tokens = 3\ncolor = false\n").unwrap();

        let settings = Settings::load(&CliOverrides::default(), dir.path()).unwrap();
        assert_eq!(settings.max_tokens, Some(3));
        assert!(!settings.color);
        assert!(!settings.json);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let file = FileConfig {
            max_tokens: Some(3),
            json: Some(false),
            color: Some(true),
        };
        let cli = CliOverrides {
            max_tokens: Some(0),
            json: true,
            config: None,
        };
        let settings = Settings::resolve(file, &cli);
        assert_eq!(settings.max_tokens, Some(0));
        assert!(settings.json);
        // JSON output is never colored
        assert!(!settings.color);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = FileConfig::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_rejects_zero_max_tokens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.toml");
        std::fs::write(&path, "max-tokens = 0").unwrap();
        let err = FileConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxTokens { .. }));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("typo.toml");
        std::fs::write(&path, "max_tokens = 5").unwrap();
        let err = FileConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
