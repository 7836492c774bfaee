//! Line and column lookup for byte offsets.
//!
//! Scanner positions are byte offsets. Emitters that have the source text
//! at hand turn them into 1-based `line:column` pairs for display.

/// Pre-computed line start table.
///
/// One O(n) pass over the source, then O(log L) lookups by binary search.
///
/// ```
/// use lexa_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 8), (2, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0]` is always 0.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scanner sources are limited to u32::MAX bytes"
    )]
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push((i + 1) as u32);
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get the 1-based line number containing `offset`.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by source length"
    )]
    fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        (line_idx as u32) + 1
    }

    /// Get 1-based `(line, column)` for `offset`.
    ///
    /// The column counts characters, not bytes, from the line start.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col_chars = source
            .get(line_start..end)
            .map_or(end - line_start, |text| text.chars().count());
        let col = u32::try_from(col_chars).unwrap_or(u32::MAX - 1) + 1;
        (line, col)
    }

}
