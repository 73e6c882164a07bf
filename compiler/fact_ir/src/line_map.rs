//! Mapping from byte offsets to line/column positions.

use crate::Span;

/// Index of line start offsets for a source text.
///
/// Built once per source and shared by the lexer and parser so diagnostics
/// can report 1-based `(line, column)` positions.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset of the first character of each line. Always starts with 0.
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build the line index for `source`.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (pos, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(u32::try_from(pos + 1).unwrap_or(u32::MAX));
            }
        }
        LineMap { line_starts }
    }

    /// The 1-based line containing `offset`.
    #[inline]
    pub fn line(&self, offset: u32) -> u32 {
        let idx = self.line_starts.partition_point(|&start| start <= offset);
        u32::try_from(idx).unwrap_or(u32::MAX)
    }

    /// The 1-based `(line, column)` of `offset`. Columns count bytes.
    pub fn location(&self, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let start = self.line_starts[line as usize - 1];
        (line, offset - start + 1)
    }

    /// The 1-based `(line, column)` of a span's start.
    #[inline]
    pub fn span_location(&self, span: Span) -> (u32, u32) {
        self.location(span.start)
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_line() {
        let map = LineMap::new("val x := 1 end");
        assert_eq!(map.location(0), (1, 1));
        assert_eq!(map.location(4), (1, 5));
    }

    #[test]
    fn multi_line() {
        let map = LineMap::new("ab\ncd\n\nef");
        assert_eq!(map.line_count(), 4);
        assert_eq!(map.location(0), (1, 1));
        assert_eq!(map.location(3), (2, 1));
        assert_eq!(map.location(4), (2, 2));
        assert_eq!(map.location(7), (4, 1));
    }

    #[test]
    fn offset_at_newline_belongs_to_its_line() {
        let map = LineMap::new("a\nb");
        assert_eq!(map.location(1), (1, 2));
        assert_eq!(map.location(2), (2, 1));
    }
}
