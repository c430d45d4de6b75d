//! Finding the geometry under a cursor position

use std::path::Path;

use wkt_scanner::{LineIndex, WktToken, scan, token_at};

use crate::error::ScanError;

/// A cursor position as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Byte offset (0-based)
    Offset(usize),
    /// Line and character column, both 1-based like editor status bars
    LineColumn { line: usize, column: usize },
}

impl Target {
    /// Byte offset of the target, if it exists in the indexed text.
    ///
    /// Offsets past the end are kept as-is; they simply match no token.
    pub fn resolve(self, index: &LineIndex<'_>) -> Option<usize> {
        match self {
            Target::Offset(offset) => Some(offset),
            Target::LineColumn { line, column } => {
                index.position_to_offset(line.checked_sub(1)?, column.checked_sub(1)?)
            }
        }
    }
}

/// The token covering `target` in `text`, which was read from `path`.
pub fn locate(path: &Path, text: &str, target: Target) -> Result<Option<WktToken>, ScanError> {
    let index = LineIndex::new(text);
    let Some(offset) = target.resolve(&index) else {
        let (line, column) = match target {
            Target::LineColumn { line, column } => (line, column),
            Target::Offset(offset) => (0, offset),
        };
        return Err(ScanError::PositionOutOfRange {
            path: path.to_path_buf(),
            line,
            column,
        });
    };

    let tokens = scan(text);
    let found = token_at(&tokens, offset).cloned();
    tracing::debug!(offset, found = found.is_some(), "located position");
    Ok(found)
}
