//! Column spans: the approximate visual width of a span of text.
//!
//! True rendered width depends on fonts, ligatures and grapheme clustering, none of which a
//! headless engine can see. Widths here are an accepted approximation:
//!
//! - [`CodePointSpan`] (the default) counts every Unicode code point as one column.
//! - [`CellSpan`] uses UAX #11 cell widths (CJK wide characters take two cells).
//!
//! Both expand `'\t'` to the next tab stop relative to the column the tab starts at, which is
//! why every span is measured from an explicit starting column.

use unicode_width::UnicodeWidthChar;

/// Default tab width (in columns) used when neither the options nor the host specify one.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Columns a `'\t'` starting at `col` advances by.
pub fn tab_advance(col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    tab_width - col % tab_width
}

/// A pluggable visual width function.
pub trait ColumnSpan {
    /// Number of columns `ch` advances by when it starts at column `col`.
    fn advance(&self, ch: char, col: usize, tab_width: usize) -> usize;

    /// Width of `text` when it starts at column `start_col`.
    ///
    /// Returns the width only; the end column is `start_col + span`.
    fn span(&self, text: &str, start_col: usize, tab_width: usize) -> usize {
        let mut col = start_col;
        for ch in text.chars() {
            col = col.saturating_add(self.advance(ch, col, tab_width));
        }
        col - start_col
    }
}

/// Every code point is one column wide, tabs advance to the next tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodePointSpan;

impl ColumnSpan for CodePointSpan {
    fn advance(&self, ch: char, col: usize, tab_width: usize) -> usize {
        if ch == '\t' {
            tab_advance(col, tab_width)
        } else {
            1
        }
    }
}

/// Terminal-style cell widths (UAX #11), tabs advance to the next tab stop.
///
/// Control characters other than `'\t'` count as one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellSpan;

impl ColumnSpan for CellSpan {
    fn advance(&self, ch: char, col: usize, tab_width: usize) -> usize {
        if ch == '\t' {
            tab_advance(col, tab_width)
        } else {
            UnicodeWidthChar::width(ch).unwrap_or(1)
        }
    }
}

/// Width of `text` starting at `start_col`, using [`CodePointSpan`].
pub fn column_span(text: &str, start_col: usize, tab_width: usize) -> usize {
    CodePointSpan.span(text, start_col, tab_width)
}

/// Width of raw UTF-16 code units starting at `start_col`.
///
/// A valid surrogate pair decodes to one code point and counts once. An unpaired surrogate
/// counts as one column, same as any other code point.
pub fn column_span_utf16(units: &[u16], start_col: usize, tab_width: usize) -> usize {
    let mut col = start_col;
    for decoded in char::decode_utf16(units.iter().copied()) {
        let advance = match decoded {
            Ok(ch) => CodePointSpan.advance(ch, col, tab_width),
            Err(_) => 1,
        };
        col = col.saturating_add(advance);
    }
    col - start_col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_advance() {
        assert_eq!(tab_advance(0, 4), 4);
        assert_eq!(tab_advance(1, 4), 3);
        assert_eq!(tab_advance(3, 4), 1);
        assert_eq!(tab_advance(4, 4), 4);
        // zero tab width behaves like 1
        assert_eq!(tab_advance(7, 0), 1);
    }

    #[test]
    fn test_code_point_span() {
        assert_eq!(column_span("hello", 0, 4), 5);
        assert_eq!(column_span("", 3, 4), 0);
        // a (1) + tab to col 4 (3) + b (1)
        assert_eq!(column_span("a\tb", 0, 4), 5);
        // the same text starting mid tab stop
        assert_eq!(column_span("a\tb", 2, 4), 3);
        assert_eq!(column_span("\t\t", 1, 8), 15);
    }

    #[test]
    fn test_code_point_span_counts_emoji_once() {
        // one code point, two UTF-16 units, four UTF-8 bytes
        assert_eq!(column_span("🦀", 0, 4), 1);
        assert_eq!(column_span("a🦀b", 0, 4), 3);
        // CJK is still one code point each
        assert_eq!(column_span("你好", 0, 4), 2);
    }

    #[test]
    fn test_cell_span() {
        assert_eq!(CellSpan.span("你好", 0, 4), 4);
        assert_eq!(CellSpan.span("a\u{301}", 0, 4), 1);
        assert_eq!(CellSpan.span("你\t", 0, 4), 4);
    }

    #[test]
    fn test_utf16_span() {
        let crab: Vec<u16> = "🦀".encode_utf16().collect();
        assert_eq!(crab.len(), 2);
        assert_eq!(column_span_utf16(&crab, 0, 4), 1);

        let tabbed: Vec<u16> = "a\tb".encode_utf16().collect();
        assert_eq!(column_span_utf16(&tabbed, 0, 4), 5);

        // a valid pair, a lone low surrogate, then 'x'
        let broken = [0xD83E, 0xDD80, 0xDD80, 0x0078];
        assert_eq!(column_span_utf16(&broken, 0, 4), 3);
        assert_eq!(column_span_utf16(&[0xD800], 0, 4), 1);
    }
}
