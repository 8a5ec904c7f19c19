//! Text utilities for position conversion.
//!
//! LSP positions are line/column pairs with columns counted in UTF-16 code
//! units; everything else here works in byte offsets. The index pre-computes
//! line start offsets so lookups are O(log n).

use tower_lsp::lsp_types::Position;

/// Pre-computed line index over a document's source text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset where each line starts.
    line_starts: Vec<usize>,
    source: String,
}

impl LineIndex {
    pub fn new(source: String) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in source.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
            source,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Byte offset where the given line starts.
    pub fn line_start(&self, line: u32) -> Option<usize> {
        self.line_starts.get(line as usize).copied()
    }

    /// The text of one line, without its trailing line break.
    pub fn line(&self, line: u32) -> Option<&str> {
        let start = self.line_start(line)?;
        let end = self
            .line_starts
            .get(line as usize + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.source.len());
        Some(self.source[start..end].trim_end_matches('\r'))
    }

    /// Convert a byte offset into an LSP position.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let line_start = self.line_starts[line];
        let line_end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.source.len());

        let mut col = 0u32;
        for (i, c) in self.source[line_start..line_end].char_indices() {
            if line_start + i >= offset {
                break;
            }
            col += c.len_utf16() as u32;
        }

        Position::new(line as u32, col)
    }

    /// Convert an LSP position into a byte offset.
    ///
    /// A column past the end of the line resolves to the end of the line;
    /// a line past the end of the document resolves to `None`.
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let line_start = self.line_start(position.line)?;
        let line = self.line(position.line)?;

        let mut utf16_col = 0u32;
        for (i, c) in line.char_indices() {
            if utf16_col >= position.character {
                return Some(line_start + i);
            }
            utf16_col += c.len_utf16() as u32;
        }

        Some(line_start + line.len())
    }
}
