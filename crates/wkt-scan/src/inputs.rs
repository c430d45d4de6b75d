//! Resolving command-line file arguments into inputs to scan

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Display name used for text read from standard input
pub const STDIN_NAME: &str = "<stdin>";

/// Something to scan: a file on disk or standard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Read the whole input as UTF-8 text
    pub fn read_to_string(&self) -> Result<String, ScanError> {
        match self {
            Input::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| ScanError::Io {
                        path: PathBuf::from(STDIN_NAME),
                        source,
                    })?;
                Ok(text)
            }
            Input::File(path) => read_file(path),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str(STDIN_NAME),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn read_file(path: &Path) -> Result<String, ScanError> {
    std::fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand file arguments into inputs, in argument order.
///
/// `-` is standard input. Arguments containing `*`, `?` or `[` are glob
/// patterns; anything else is a literal path that must exist. A pattern
/// matching nothing is only a warning.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<Input>, ScanError> {
    let mut inputs = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            inputs.push(Input::Stdin);
        } else if is_glob(pattern) {
            let paths = glob::glob(pattern).map_err(|source| ScanError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;

            let before = inputs.len();
            for entry in paths {
                let path = entry.map_err(|err| ScanError::Io {
                    path: err.path().to_path_buf(),
                    source: err.into_error(),
                })?;
                if path.is_file() {
                    inputs.push(Input::File(path));
                }
            }

            if inputs.len() == before {
                tracing::warn!(pattern = %pattern, "no files matched pattern");
            }
        } else {
            let path = PathBuf::from(pattern);
            if !path.exists() {
                return Err(ScanError::FileNotFound(path));
            }
            inputs.push(Input::File(path));
        }
    }

    Ok(inputs)
}
