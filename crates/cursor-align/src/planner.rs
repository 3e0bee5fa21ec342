//! Insertion Planner: turns a [`ColumnLayout`] into space inserts and final selections.
//!
//! The engine only ever inserts spaces. Every insert offset refers to the original snapshot;
//! per-line drift is tracked here so the final selections can be computed without re-reading
//! the buffer.

use crate::columns::ColumnLayout;
use crate::selection::{Position, Selection};

/// Insert `count` spaces at `column` on `line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpaceInsert {
    /// Zero-based logical line index.
    pub line: usize,
    /// Character offset within the line, in the pre-edit text.
    pub column: usize,
    /// Number of spaces to insert.
    pub count: usize,
}

impl SpaceInsert {
    /// Create a space insert.
    pub fn new(line: usize, column: usize, count: usize) -> Self {
        Self {
            line,
            column,
            count,
        }
    }

    /// Pre-edit position of the insert.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The inserted text.
    pub fn text(&self) -> String {
        " ".repeat(self.count)
    }
}

/// Result of planning an alignment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignPlan {
    /// Inserts sorted by `(line, column)`, at most one per position.
    pub inserts: Vec<SpaceInsert>,
    /// One selection per block, in post-edit coordinates, sorted by start position.
    pub selections: Vec<Selection>,
}

impl AlignPlan {
    /// Returns `true` if nothing needs to be inserted.
    ///
    /// Hosts should skip the edit entirely in that case so no empty undo step is recorded.
    pub fn is_noop(&self) -> bool {
        self.inserts.is_empty()
    }

    /// Total number of spaces the plan inserts.
    pub fn inserted_spaces(&self) -> usize {
        self.inserts.iter().map(|i| i.count).sum()
    }
}

/// Compute the inserts that pad every block to its column's widths.
///
/// Work proceeds column by column. Within a line, the offsets of column `c` are shifted by
/// everything inserted for columns `0..c` on that line. A block's final selection ends after
/// its content padding, so the aligned span stays selected and a second run inserts nothing.
pub fn plan_insertions(layout: &ColumnLayout) -> AlignPlan {
    let mut inserts = Vec::new();
    let mut selections = Vec::new();
    let mut drift = vec![0usize; layout.lines.len()];

    for column in &layout.columns {
        for &slot in &column.members {
            let Some(resolved) = layout.block(slot, column.index) else {
                continue;
            };
            let block = resolved.block;
            let add_padding = column
                .padding_col_span
                .saturating_sub(resolved.padding_col_span);
            let add_content = column
                .column_col_span
                .saturating_sub(resolved.block_col_span);

            if add_padding > 0 {
                inserts.push(SpaceInsert::new(block.line, block.start_char, add_padding));
                drift[slot] += add_padding;
            }
            let final_start = block.start_char + drift[slot];

            if add_content > 0 {
                inserts.push(SpaceInsert::new(block.line, block.end_char, add_content));
                drift[slot] += add_content;
            }
            let final_end = block.end_char + drift[slot];

            selections.push(Selection::on_line(block.line, final_start, final_end));
        }
    }

    inserts.sort_by_key(|i| (i.line, i.column));
    selections.sort_by_key(|s| s.start);

    AlignPlan {
        inserts: coalesce(inserts),
        selections,
    }
}

// Content padding of one block and leading padding of a touching block land on the same offset.
fn coalesce(sorted: Vec<SpaceInsert>) -> Vec<SpaceInsert> {
    let mut out: Vec<SpaceInsert> = Vec::with_capacity(sorted.len());
    for insert in sorted {
        match out.last_mut() {
            Some(last) if last.position() == insert.position() => last.count += insert.count,
            _ => out.push(insert),
        }
    }
    out
}
