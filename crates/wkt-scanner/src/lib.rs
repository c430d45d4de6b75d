//! Extraction of WKT geometry literals from free text
//!
//! This crate finds every top-level Well-Known-Text literal (`POINT (1 2)`,
//! `GEOMETRYCOLLECTION (...)`, `LINESTRING EMPTY`, ...) embedded in
//! arbitrary text such as source code, logs or comments. Scanning is a
//! single linear pass that tolerates malformed or truncated content by
//! resynchronizing instead of failing.
//!
//! # Overview
//!
//! - [`scan`] / [`scan_limited`] / [`Scanner`]: the token scanner
//! - [`WktToken`]: an extracted literal with byte offsets and line numbers
//! - [`LineIndex`]: conversion between byte offsets and editor positions
//! - [`token_at`], [`tokens_overlapping`], [`scan_selection`]: selection
//!   round-trips between a host editor and a token list
//!
//! # Example
//!
//! ```rust
//! use wkt_scanner::{GeometryKind, scan};
//!
//! let text = "// centroid: POINT (30 10)\nlet area = POLYGON ((0 0, 1 0, 1 1, 0 0));";
//! let tokens = scan(text);
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].kind(), Some(GeometryKind::Point));
//! assert_eq!(&text[tokens[1].range()], "POLYGON ((0 0, 1 0, 1 1, 0 0))");
//! assert_eq!(tokens[1].line, 1);
//! ```

pub mod bracket;
pub mod keyword;
pub mod position;
pub mod scanner;
pub mod selection;
pub mod token;

pub use bracket::{MatchResult, match_body};
pub use keyword::{GeometryKind, UnknownGeometryKind};
pub use position::{LineIndex, Position};
pub use scanner::{Scanner, extract_wkt, scan, scan_limited};
pub use selection::{scan_selection, token_at, tokens_overlapping};
pub use token::WktToken;
