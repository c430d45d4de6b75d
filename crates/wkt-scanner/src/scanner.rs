//! Single-pass extraction of top-level WKT literals from free text
//!
//! The scanner walks the input once, left to right. It reads whole
//! alphabetic runs and compares each run against the geometry keywords, so
//! ordinary prose is skipped without probing every position. A keyword must
//! be followed (after optional whitespace) by `EMPTY` or by a parenthesized
//! body; bodies are handed to [`match_body`], and rejected bodies resume the
//! scan at the recovery point it reports. Malformed input never produces an
//! error, only fewer tokens.
//!
//! # Example
//!
//! ```rust
//! use wkt_scanner::scan;
//!
//! let tokens = scan("start = POINT (30 10)\nend = POINT EMPTY");
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].wkt, "POINT (30 10)");
//! assert_eq!(tokens[1].line, 1);
//! ```

use std::iter::FusedIterator;

use crate::bracket::{MatchResult, match_body};
use crate::keyword::{EMPTY_MARKER, GeometryKind, empty_marker_at};
use crate::token::WktToken;

/// Lazy iterator over the top-level WKT tokens of one input
///
/// Tokens come out in increasing `start` order and never overlap. Work is
/// only done when the next token is requested, so `take(n)` stops the scan
/// right after the n-th token.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner {
            input,
            pos: 0,
            line: 0,
        }
    }

    /// Current byte offset of the cursor
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Line of the cursor (0-indexed)
    pub fn line(&self) -> usize {
        self.line
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    /// Advance past everything that cannot start a word
    fn skip_to_word(&mut self) {
        let bytes = self.bytes();
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphabetic() {
            if bytes[self.pos] == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// Consume a maximal alphabetic run and return its start
    fn take_word(&mut self) -> usize {
        let bytes = self.bytes();
        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        start
    }

    /// Try to complete a geometry whose keyword spans `word_start..self.pos`.
    ///
    /// On success the cursor is past the token. On failure the cursor is
    /// left where scanning must resume.
    fn complete_geometry(&mut self, kind: GeometryKind, word_start: usize) -> Option<WktToken> {
        let bytes = self.bytes();
        let start_line = self.line;

        let mut pos = self.pos;
        let mut line = self.line;
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            if bytes[pos] == b'\n' {
                line += 1;
            }
            pos += 1;
        }

        if empty_marker_at(bytes, pos) {
            let end = pos + EMPTY_MARKER.len();
            self.pos = end;
            self.line = line;
            return Some(WktToken::new(self.input, word_start..end, start_line, line));
        }

        if bytes.get(pos) != Some(&b'(') {
            tracing::trace!(
                %kind,
                offset = word_start,
                "keyword not followed by a body, rescanning from the next character"
            );
            self.pos = word_start + 1;
            self.line = start_line;
            return None;
        }

        match match_body(bytes, pos, line) {
            MatchResult::Matched { close, line } => {
                self.pos = close + 1;
                self.line = line;
                Some(WktToken::new(
                    self.input,
                    word_start..close + 1,
                    start_line,
                    line,
                ))
            }
            MatchResult::Failed { recover_at, line } => {
                tracing::trace!(
                    %kind,
                    offset = word_start,
                    recover_at,
                    line,
                    "rejected geometry body"
                );
                self.pos = recover_at;
                self.line = line;
                None
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = WktToken;

    fn next(&mut self) -> Option<WktToken> {
        loop {
            self.skip_to_word();
            if self.pos >= self.input.len() {
                return None;
            }

            let word_start = self.take_word();
            let Some(kind) = GeometryKind::from_word(&self.bytes()[word_start..self.pos]) else {
                continue;
            };

            if let Some(token) = self.complete_geometry(kind, word_start) {
                return Some(token);
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Extract every top-level WKT literal in `input`
pub fn scan(input: &str) -> Vec<WktToken> {
    Scanner::new(input).collect()
}

/// Extract at most `max_tokens` top-level WKT literals.
///
/// The result is always a prefix of [`scan`]'s. The limit is only consulted
/// between tokens, so the last token is never cut short.
pub fn scan_limited(input: &str, max_tokens: usize) -> Vec<WktToken> {
    Scanner::new(input).take(max_tokens).collect()
}

/// The WKT substrings only, borrowed from `input`
pub fn extract_wkt(input: &str) -> Vec<&str> {
    Scanner::new(input)
        .map(|token| &input[token.range()])
        .collect()
}
