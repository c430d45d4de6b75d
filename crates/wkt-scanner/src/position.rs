//! Offset and line/column conversion for editor hosts
//!
//! Scanner tokens carry byte offsets. Editors address text by line and
//! column, usually counting columns in UTF-16 code units, so hosts convert
//! through a [`LineIndex`] built once per text.

use serde::{Deserialize, Serialize};

/// A resolved position in the text (all fields 0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from start of text
    pub offset: usize,
    pub line: usize,
    /// Column in characters
    pub column: usize,
    /// Column in UTF-16 code units
    pub utf16_column: usize,
}

/// Line start table for fast position lookups
///
/// Building it scans the text once; lookups use binary search over the
/// line starts plus a walk within a single line.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of the first character of each line
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                text.bytes()
                    .enumerate()
                    .filter_map(|(idx, b)| (b == b'\n').then_some(idx + 1)),
            )
            .collect();
        LineIndex { text, line_starts }
    }

    /// Number of lines; a text without line breaks has one
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Length of the indexed text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset where `line` begins
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Line containing `offset`. A `\n` belongs to the line it terminates.
    pub fn line_of(&self, offset: usize) -> Option<usize> {
        if offset > self.text.len() {
            return None;
        }
        Some(match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        })
    }

    /// Resolve a byte offset. Returns None past the end or inside a
    /// multi-byte character.
    pub fn offset_to_position(&self, offset: usize) -> Option<Position> {
        if !self.text.is_char_boundary(offset) {
            return None;
        }
        let line = self.line_of(offset)?;
        let prefix = &self.text[self.line_starts[line]..offset];
        Some(Position {
            offset,
            line,
            column: prefix.chars().count(),
            utf16_column: prefix.encode_utf16().count(),
        })
    }

    /// Byte offset of a character column on a line.
    ///
    /// The column may point one past the last character of the line (before
    /// its line break), but not beyond.
    pub fn position_to_offset(&self, line: usize, column: usize) -> Option<usize> {
        let content = self.line_content(line)?;
        if column == content.chars().count() {
            return Some(self.line_starts[line] + content.len());
        }
        content
            .char_indices()
            .nth(column)
            .map(|(idx, _)| self.line_starts[line] + idx)
    }

    /// Byte offset of a UTF-16 column on a line, as editors report them.
    ///
    /// Columns landing in the middle of a surrogate pair are rejected.
    pub fn utf16_position_to_offset(&self, line: usize, utf16_column: usize) -> Option<usize> {
        let content = self.line_content(line)?;
        let mut units = 0;
        for (idx, ch) in content.char_indices() {
            if units == utf16_column {
                return Some(self.line_starts[line] + idx);
            }
            units += ch.len_utf16();
            if units > utf16_column {
                return None;
            }
        }
        (units == utf16_column).then_some(self.line_starts[line] + content.len())
    }

    /// Text of a line without its `\n` (or `\r\n`) terminator
    fn line_content(&self, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.text.len(), |next| next - 1);
        let content = &self.text[start..end];
        Some(content.strip_suffix('\r').unwrap_or(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let index = LineIndex::new("");
        assert!(index.is_empty());
        assert_eq!(index.line_count(), 1);
        let pos = index.offset_to_position(0).unwrap();
        assert_eq!((pos.line, pos.column), (0, 0));
        assert!(index.offset_to_position(1).is_none());
    }

    #[test]
    fn test_offset_to_position_simple() {
        let index = LineIndex::new("hello\nworld");
        assert_eq!(index.line_count(), 2);

        let pos = index.offset_to_position(3).unwrap();
        assert_eq!((pos.line, pos.column), (0, 3));

        // The newline itself belongs to the first line
        let pos = index.offset_to_position(5).unwrap();
        assert_eq!((pos.line, pos.column), (0, 5));

        let pos = index.offset_to_position(6).unwrap();
        assert_eq!((pos.line, pos.column), (1, 0));

        let pos = index.offset_to_position(11).unwrap();
        assert_eq!((pos.line, pos.column), (1, 5));
        assert!(index.offset_to_position(12).is_none());
    }

    #[test]
    fn test_trailing_newline_opens_a_line() {
        let index = LineIndex::new("a\n");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_of(2), Some(1));
        assert_eq!(index.line_start(1), Some(2));
        assert_eq!(index.line_start(2), None);
    }

    #[test]
    fn test_columns_count_characters_and_utf16_units() {
        // `é` is 2 bytes / 1 unit, `𝄞` is 4 bytes / 2 units
        let text = "é𝄞POINT";
        let index = LineIndex::new(text);
        let offset = text.find("POINT").unwrap();
        assert_eq!(offset, 6);
        let pos = index.offset_to_position(offset).unwrap();
        assert_eq!(pos.column, 2);
        assert_eq!(pos.utf16_column, 3);
    }

    #[test]
    fn test_offset_inside_character_is_rejected() {
        let index = LineIndex::new("é");
        assert!(index.offset_to_position(1).is_none());
    }

    #[test]
    fn test_position_to_offset() {
        let index = LineIndex::new("hello\nworld");
        assert_eq!(index.position_to_offset(0, 0), Some(0));
        assert_eq!(index.position_to_offset(0, 5), Some(5));
        assert_eq!(index.position_to_offset(1, 3), Some(9));
        assert_eq!(index.position_to_offset(1, 5), Some(11));
        assert_eq!(index.position_to_offset(0, 6), None);
        assert_eq!(index.position_to_offset(2, 0), None);
    }

    #[test]
    fn test_position_to_offset_ignores_carriage_return() {
        let index = LineIndex::new("ab\r\ncd");
        assert_eq!(index.position_to_offset(0, 2), Some(2));
        assert_eq!(index.position_to_offset(0, 3), None);
        assert_eq!(index.position_to_offset(1, 1), Some(5));
    }

    #[test]
    fn test_utf16_position_to_offset() {
        let text = "é𝄞POINT";
        let index = LineIndex::new(text);
        assert_eq!(index.utf16_position_to_offset(0, 0), Some(0));
        assert_eq!(index.utf16_position_to_offset(0, 1), Some(2));
        // Middle of the surrogate pair
        assert_eq!(index.utf16_position_to_offset(0, 2), None);
        assert_eq!(index.utf16_position_to_offset(0, 3), Some(6));
        assert_eq!(index.utf16_position_to_offset(0, 8), Some(text.len()));
        assert_eq!(index.utf16_position_to_offset(0, 9), None);
    }

    #[test]
    fn test_roundtrip() {
        let text = "line1\nlïne2\r\nline3";
        let index = LineIndex::new(text);
        for offset in (0..=text.len()).filter(|o| text.is_char_boundary(*o)) {
            let pos = index.offset_to_position(offset).unwrap();
            if let Some(back) = index.position_to_offset(pos.line, pos.column) {
                assert_eq!(back, offset);
            }
            if let Some(back) = index.utf16_position_to_offset(pos.line, pos.utf16_column) {
                assert_eq!(back, offset);
            }
        }
    }
}
