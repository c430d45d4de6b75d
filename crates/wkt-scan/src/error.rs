//! Error types for the scan host.
//!
//! Copyright (c) 2026 Posit, PBC

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting and scanning inputs
#[derive(Debug, Error)]
pub enum ScanError {
    /// Reading an input failed
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A literal input path does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A glob pattern could not be parsed
    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A line/column pair that does not exist in the file
    #[error("Position {line}:{column} is outside of {}", .path.display())]
    PositionOutOfRange {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from loading `wkt-scan.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// `max-tokens = 0` would hide every geometry
    #[error("max-tokens must be a positive integer (in {})", .path.display())]
    InvalidMaxTokens { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = ScanError::FileNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "File not found: missing.txt");

        let err = ScanError::from(ConfigError::InvalidMaxTokens {
            path: PathBuf::from("wkt-scan.toml"),
        });
        assert_eq!(
            err.to_string(),
            "max-tokens must be a positive integer (in wkt-scan.toml)"
        );
    }
}
