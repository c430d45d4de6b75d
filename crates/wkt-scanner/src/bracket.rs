//! Parenthesis matching for geometry bodies, with recovery
//!
//! A body is accepted when its parentheses balance and it contains only
//! coordinate characters (digits, `.`, `-`, `,`, blanks, line breaks) and
//! the words in [`is_body_word`]. Anything else ends the match early and
//! reports where the outer scan should pick up again.

use crate::keyword::is_body_word;

/// Outcome of matching the body that starts at an opening parenthesis
///
/// `line` is always the line number valid at the reported index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Depth returned to zero at the `)` at index `close`
    Matched { close: usize, line: usize },
    /// The body was rejected; resume the outer scan at `recover_at`.
    /// `recover_at == input.len()` when the input ended first.
    Failed { recover_at: usize, line: usize },
}

/// Match the body whose `(` is at `open`, with `line` being the line of
/// that parenthesis.
pub fn match_body(bytes: &[u8], open: usize, line: usize) -> MatchResult {
    debug_assert_eq!(bytes.get(open), Some(&b'('));

    let mut depth: usize = 0;
    let mut line = line;
    // Just past the last clause boundary (`,` or space), or past the opening
    // parenthesis until one is seen, with the line valid there
    let mut resume = (open + 1, line);
    let mut pos = open;

    while pos < bytes.len() {
        match bytes[pos] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return MatchResult::Matched { close: pos, line };
                }
            }
            b'\n' => line += 1,
            b'\r' | b'\t' | b'0'..=b'9' | b'.' | b'-' => {}
            b',' | b' ' => resume = (pos + 1, line),
            b if b.is_ascii_alphabetic() => {
                let word_start = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
                    pos += 1;
                }
                if !is_body_word(&bytes[word_start..pos]) {
                    return MatchResult::Failed {
                        recover_at: pos,
                        line,
                    };
                }
                continue;
            }
            _ => {
                let (recover_at, line) = resume;
                return MatchResult::Failed { recover_at, line };
            }
        }
        pos += 1;
    }

    MatchResult::Failed {
        recover_at: bytes.len(),
        line,
    }
}
