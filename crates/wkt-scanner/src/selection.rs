//! Mapping editor selections to tokens and back
//!
//! Hosts send the scanner's tokens to a viewer and receive `{ start, end }`
//! selections in return (and the other way around). These helpers rely on
//! the scanner's ordering guarantee: tokens sorted by `start`, never
//! overlapping.

use std::ops::Range;

use crate::position::LineIndex;
use crate::scanner::Scanner;
use crate::token::WktToken;

/// The token under `offset`, treating each token's end as inside it so a
/// caret right after the closing parenthesis still selects the geometry.
///
/// When two tokens touch (`a.end == b.start`), the later one wins.
pub fn token_at(tokens: &[WktToken], offset: usize) -> Option<&WktToken> {
    let idx = tokens.partition_point(|t| t.start <= offset);
    idx.checked_sub(1)
        .map(|i| &tokens[i])
        .filter(|t| t.contains_offset(offset))
}

/// Tokens intersecting the half-open byte range `start..end`.
///
/// An empty range selects like [`token_at`].
pub fn tokens_overlapping(tokens: &[WktToken], start: usize, end: usize) -> &[WktToken] {
    if end <= start {
        let idx = tokens.partition_point(|t| t.start <= start);
        return match idx.checked_sub(1) {
            Some(i) if tokens[i].contains_offset(start) => &tokens[i..idx],
            _ => &[],
        };
    }
    let first = tokens.partition_point(|t| t.end <= start);
    let last = tokens.partition_point(|t| t.start < end);
    &tokens[first..last.max(first)]
}

/// Scan only `document[range]`, reporting offsets and lines relative to the
/// whole document.
///
/// Returns None if the range is out of bounds or splits a character.
pub fn scan_selection(
    document: &str,
    range: Range<usize>,
    max_tokens: Option<usize>,
) -> Option<Vec<WktToken>> {
    let selected = document.get(range.clone())?;
    let base_line = LineIndex::new(document).line_of(range.start)?;
    let tokens = Scanner::new(selected)
        .take(max_tokens.unwrap_or(usize::MAX))
        .map(|token| token.rebase(range.start, base_line))
        .collect();
    Some(tokens)
}
