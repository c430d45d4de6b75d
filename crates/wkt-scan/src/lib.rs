//! Host-side plumbing for the `wkt-scan` command
//!
//! Loads text from files or standard input, runs the WKT scanner over it,
//! renders the tokens for people (text and a summary) or for programs
//! (JSONL), and maps cursor positions back to the geometry under them.

pub mod config;
pub mod error;
pub mod extract;
pub mod inputs;
pub mod locate;
pub mod output;

pub use config::{CliOverrides, FileConfig, Settings};
pub use error::{ConfigError, ScanError};
pub use extract::{FileReport, Summary, TokenRecord, extract_inputs};
pub use inputs::{Input, expand_inputs};
pub use locate::{Target, locate};
