//! The extracted WKT token

use crate::keyword::GeometryKind;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One top-level WKT literal found in a text
///
/// Offsets are byte offsets into the scanned text with `end` exclusive, so
/// `&text[token.start..token.end] == token.wkt`. Lines are 0-indexed.
///
/// Serializes as `{ "wkt", "start", "end", "line", "endLine" }`, the shape
/// editor hosts exchange for highlighting and selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WktToken {
    /// The exact substring `text[start..end]`
    pub wkt: String,
    /// Byte offset of the first letter of the geometry keyword
    pub start: usize,
    /// Byte offset just past the closing `)` or the final letter of `EMPTY`
    pub end: usize,
    /// Line of the keyword
    pub line: usize,
    /// Line of the last character of the token
    pub end_line: usize,
}

impl WktToken {
    pub(crate) fn new(input: &str, range: Range<usize>, line: usize, end_line: usize) -> Self {
        WktToken {
            wkt: input[range.clone()].to_string(),
            start: range.start,
            end: range.end,
            line,
            end_line,
        }
    }

    /// Byte range in the scanned text
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the token in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for tokens produced by the scanner
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The geometry tag the token starts with
    pub fn kind(&self) -> Option<GeometryKind> {
        let bytes = self.wkt.as_bytes();
        let word_end = bytes
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .unwrap_or(bytes.len());
        GeometryKind::from_word(&bytes[..word_end])
    }

    /// True for the `KEYWORD EMPTY` form, which has no parenthesized body
    pub fn is_empty_geometry(&self) -> bool {
        !self.wkt.ends_with(')')
    }

    /// Whether `offset` falls on the token, counting the position right
    /// after the last character as inside.
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Number of lines the token spans
    pub fn line_span(&self) -> usize {
        self.end_line - self.line + 1
    }

    /// Shift offsets and lines, used when a token was scanned out of a
    /// slice of a larger document.
    pub(crate) fn rebase(mut self, offset: usize, lines: usize) -> Self {
        self.start += offset;
        self.end += offset;
        self.line += lines;
        self.end_line += lines;
        self
    }
}
