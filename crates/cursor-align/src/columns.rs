//! Column Resolver: groups blocks across lines into table columns and measures them.
//!
//! Columns are positional. The i-th block of every line belongs to column i; a line with fewer
//! blocks simply stops contributing to later columns.
//!
//! Each block is measured twice:
//!
//! - **padding**: the text between the previous block's end (or the line start) and the block's
//!   start,
//! - **content**: the text inside the block.
//!
//! A tab's width depends on the column it starts at, and after alignment every line reaches a
//! column at the same visual position. Widths are therefore resolved column by column, left to
//! right: padding text of column `c` is measured from the aligned start of column `c`, content
//! text from that start plus the column's resolved padding width.

use crate::blocks::{AlignBlock, LineBlocks};
use crate::source::LineText;
use crate::span::ColumnSpan;
use tracing::trace;

/// An [`AlignBlock`] with its measured widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBlock {
    /// The block being aligned.
    pub block: AlignBlock,
    /// Index of the owning [`TableColumn`].
    pub column: usize,
    /// Width of the text between the previous block (or line start) and this block.
    pub padding_col_span: usize,
    /// Width of the block's own text.
    pub block_col_span: usize,
}

/// All resolved blocks of one line, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLine {
    /// Zero-based logical line index.
    pub line: usize,
    /// Block `i` belongs to column `i`.
    pub blocks: Vec<ResolvedBlock>,
}

/// One logical table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Position of the column, left to right.
    pub index: usize,
    /// Aligned visual column where this column's padding text starts.
    pub start_col: usize,
    /// Max padding width among member blocks.
    pub padding_col_span: usize,
    /// Max content width among member blocks.
    pub column_col_span: usize,
    /// Indices into [`ColumnLayout::lines`] of the lines with a block in this column.
    pub members: Vec<usize>,
}

impl TableColumn {
    /// Aligned visual column where the content of every member block starts.
    pub fn content_start_col(&self) -> usize {
        self.start_col + self.padding_col_span
    }

    /// Aligned visual column right after this column.
    pub fn end_col(&self) -> usize {
        self.content_start_col() + self.column_col_span
    }
}

/// Output of [`resolve_columns`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnLayout {
    /// Columns, left to right.
    pub columns: Vec<TableColumn>,
    /// Lines, top to bottom.
    pub lines: Vec<ResolvedLine>,
}

impl ColumnLayout {
    /// The resolved block of `lines[line_slot]` in column `column`.
    pub fn block(&self, line_slot: usize, column: usize) -> Option<&ResolvedBlock> {
        self.lines.get(line_slot)?.blocks.get(column)
    }
}

/// Group `lines` into columns and resolve every width.
///
/// `lines` must come from [`crate::build_blocks`]: sorted, one entry per line, and
/// non-overlapping blocks within a line.
pub fn resolve_columns<T, W>(
    lines: &[LineBlocks],
    text: &T,
    span: &W,
    tab_width: usize,
) -> ColumnLayout
where
    T: LineText + ?Sized,
    W: ColumnSpan + ?Sized,
{
    // Pass 1: positional grouping. Membership is fixed here so later passes never
    // have to drop exhausted lines mid-scan.
    let column_count = lines.iter().map(|l| l.blocks.len()).max().unwrap_or(0);
    let mut columns: Vec<TableColumn> = (0..column_count)
        .map(|index| TableColumn {
            index,
            start_col: 0,
            padding_col_span: 0,
            column_col_span: 0,
            members: lines
                .iter()
                .enumerate()
                .filter(|(_, l)| l.blocks.len() > index)
                .map(|(slot, _)| slot)
                .collect(),
        })
        .collect();

    let mut resolved: Vec<ResolvedLine> = lines
        .iter()
        .map(|l| ResolvedLine {
            line: l.line,
            blocks: l
                .blocks
                .iter()
                .enumerate()
                .map(|(column, &block)| ResolvedBlock {
                    block,
                    column,
                    padding_col_span: 0,
                    block_col_span: 0,
                })
                .collect(),
        })
        .collect();

    // Passes 2 and 3, one column at a time.
    let mut running_col = 0usize;
    for column in &mut columns {
        column.start_col = running_col;

        for &slot in &column.members {
            let line = &mut resolved[slot];
            let prev_end = match column.index {
                0 => 0,
                i => line.blocks[i - 1].block.end_char,
            };
            let entry = &mut line.blocks[column.index];
            let padding = text.text_of_range(line.line, prev_end, entry.block.start_char);
            entry.padding_col_span = span.span(&padding, running_col, tab_width);
            column.padding_col_span = column.padding_col_span.max(entry.padding_col_span);
        }
        running_col += column.padding_col_span;

        for &slot in &column.members {
            let line = &mut resolved[slot];
            let entry = &mut line.blocks[column.index];
            let content =
                text.text_of_range(line.line, entry.block.start_char, entry.block.end_char);
            entry.block_col_span = span.span(&content, running_col, tab_width);
            column.column_col_span = column.column_col_span.max(entry.block_col_span);
        }
        running_col += column.column_col_span;

        trace!(
            column = column.index,
            members = column.members.len(),
            padding = column.padding_col_span,
            content = column.column_col_span,
            "resolved column"
        );
    }

    ColumnLayout {
        columns,
        lines: resolved,
    }
}
