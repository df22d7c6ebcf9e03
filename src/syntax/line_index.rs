//! Offset to line/column conversion

use text_size::TextSize;

/// A 1-indexed line and column pair
///
/// Columns count bytes from the start of the line, matching the byte offsets
/// stored in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

/// Start offsets of every line in a source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Builds the index for `text`
    ///
    /// `\n` terminates a line; a preceding `\r` stays part of the line.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(idx, _)| TextSize::new(idx as u32 + 1)),
        );
        Self { line_starts }
    }

    /// Number of lines, counting a trailing empty line after a final newline
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts an offset to a 1-indexed line and column
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        // line_starts[0] is always 0, so the partition point is at least 1
        let line = self.line_starts.partition_point(|start| *start <= offset) - 1;
        let column = offset - self.line_starts[line];
        LineCol {
            line: line as u32 + 1,
            column: u32::from(column) + 1,
        }
    }
}
