//! Byte offset to line/column conversion.

/// Start offsets of every line, for `O(log L)` line lookups.
///
/// ```
/// use asena_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "data Nat\nlet x = 1";
/// let table = LineOffsetTable::build(source);
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 13), (2, 5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let index = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(index).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based `(line, column)`; the column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len()).max(start);
        let col = source
            .get(start..end)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Byte offset where 1-based `line` starts.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        let index = line.checked_sub(1)?;
        self.offsets.get(index as usize).copied()
    }

    /// Text of 1-based `line` without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize);
        source
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lines_and_columns() {
        let source = "a\nbc\r\n\nλx";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_count(), 4);
        assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
        assert_eq!(table.offset_to_line_col(source, 3), (2, 2));
        assert_eq!(table.offset_to_line_col(source, 7), (4, 1));
        // 'x' follows a two-byte character
        assert_eq!(table.offset_to_line_col(source, 9), (4, 2));
    }

    #[test]
    fn line_text_strips_terminators() {
        let source = "first\r\nsecond\nthird";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_text(source, 1), Some("first"));
        assert_eq!(table.line_text(source, 2), Some("second"));
        assert_eq!(table.line_text(source, 3), Some("third"));
        assert_eq!(table.line_text(source, 4), None);
        assert_eq!(table.line_start_offset(0), None);
    }

    #[test]
    fn offset_past_end_clamps() {
        let source = "ab";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 10), (1, 3));
    }
}
