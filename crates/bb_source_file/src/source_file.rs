// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

use bb_syntax::{TextRange, TextSize};

pub trait ErrorTrait {
    /// Return a message describing the error.
    fn message(&self) -> String;

    /// Return the character range in the source associated with the error.
    fn range(&self) -> TextRange;
}

/// The crate text-range defines `TextRange`.
/// Errors are displayed with the crate `ariadne`, which uses `Range`.
/// We have to convert from the former to the latter.
pub fn range_to_span(range: &TextRange) -> std::ops::Range<usize> {
    let r1: usize = range.start().into();
    let r2: usize = range.end().into();
    r1..r2
}

/// A position in source text. `line` counts from 1, `column` counts
/// characters from 0, the convention of the ANTLR-generated Blackbird parsers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

/// Return the line and column of byte `offset` in `source`.
/// Offsets past the end of `source` are clamped to the end.
pub fn line_col(source: &str, offset: TextSize) -> LineCol {
    let offset = usize::from(offset).min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let column = before[line_start..].chars().count();
    LineCol { line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line() {
        let pos = line_col("int n = 7", TextSize::from(4));
        assert_eq!(pos, LineCol { line: 1, column: 4 });
    }

    #[test]
    fn later_line() {
        let source = "name demo\nversion 1.0\nint q0 = 1\n";
        let offset = source.find("q0").unwrap() as u32;
        let pos = line_col(source, TextSize::from(offset));
        assert_eq!(pos, LineCol { line: 3, column: 4 });
    }

    #[test]
    fn start_of_line() {
        let pos = line_col("a\nb", TextSize::from(2));
        assert_eq!(pos, LineCol { line: 2, column: 0 });
    }

    #[test]
    fn columns_count_characters() {
        let source = "str s = \"π\" x";
        let offset = source.find('x').unwrap() as u32;
        let pos = line_col(source, TextSize::from(offset));
        assert_eq!(pos.column, 12);
    }

    #[test]
    fn offset_past_end() {
        let pos = line_col("ab\n", TextSize::from(10));
        assert_eq!(pos, LineCol { line: 2, column: 0 });
    }

    #[test]
    fn span_from_range() {
        let range = TextRange::new(TextSize::from(3), TextSize::from(7));
        assert_eq!(range_to_span(&range), 3..7);
    }
}
