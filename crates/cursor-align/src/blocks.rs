//! Block Builder: turns raw selections into ordered per-line alignment blocks.
//!
//! A single-line selection becomes one block covering its text. A multi-line selection has no
//! meaningful content width, so it contributes two zero-width blocks, one at each end.

use crate::selection::{Position, Selection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How several blocks on the same line are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockPolicy {
    /// Keep every block on a line, in order. The i-th block of each line forms column i, so
    /// one line can hold several independently aligned columns.
    #[default]
    MultiCursor,
    /// Merge all blocks on a line into one block spanning `min(start)..max(end)`.
    /// Only a single column is aligned.
    Merge,
}

/// One alignment anchor on one line: the half-open character range `start_char..end_char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignBlock {
    /// Zero-based logical line index.
    pub line: usize,
    /// Inclusive start character offset within the line.
    pub start_char: usize,
    /// Exclusive end character offset within the line.
    pub end_char: usize,
}

impl AlignBlock {
    /// Create a block; the offsets are swapped if given backwards.
    pub fn new(line: usize, start_char: usize, end_char: usize) -> Self {
        Self {
            line,
            start_char: start_char.min(end_char),
            end_char: start_char.max(end_char),
        }
    }

    /// Create a zero-width block at `pos`.
    pub fn anchor(pos: Position) -> Self {
        Self::new(pos.line, pos.column, pos.column)
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end_char - self.start_char
    }

    /// Returns `true` for zero-width blocks.
    pub fn is_empty(&self) -> bool {
        self.start_char == self.end_char
    }
}

/// The ordered, non-overlapping blocks of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBlocks {
    /// Zero-based logical line index.
    pub line: usize,
    /// Blocks sorted by `start_char`.
    pub blocks: Vec<AlignBlock>,
}

/// Build per-line blocks from `selections`.
///
/// The result is sorted by line, and the blocks of every line by start offset. Lines never
/// appear twice. With [`BlockPolicy::MultiCursor`], overlapping blocks on a line are coalesced;
/// blocks that merely touch (`next.start == prev.end`) stay separate.
pub fn build_blocks(selections: &[Selection], policy: BlockPolicy) -> Vec<LineBlocks> {
    let mut by_line: BTreeMap<usize, Vec<AlignBlock>> = BTreeMap::new();

    for selection in selections {
        let (start, end) = selection.ordered();
        if selection.is_single_line() {
            by_line
                .entry(start.line)
                .or_default()
                .push(AlignBlock::new(start.line, start.column, end.column));
        } else {
            by_line
                .entry(start.line)
                .or_default()
                .push(AlignBlock::anchor(start));
            by_line
                .entry(end.line)
                .or_default()
                .push(AlignBlock::anchor(end));
        }
    }

    by_line
        .into_iter()
        .map(|(line, mut blocks)| {
            blocks.sort_by_key(|b| (b.start_char, b.end_char));
            let blocks = match policy {
                BlockPolicy::MultiCursor => coalesce_overlapping(blocks),
                BlockPolicy::Merge => merge_all(line, &blocks),
            };
            LineBlocks { line, blocks }
        })
        .collect()
}

fn coalesce_overlapping(sorted: Vec<AlignBlock>) -> Vec<AlignBlock> {
    let mut out: Vec<AlignBlock> = Vec::with_capacity(sorted.len());
    for block in sorted {
        match out.last_mut() {
            Some(last) if block.start_char < last.end_char || *last == block => {
                last.end_char = last.end_char.max(block.end_char);
            }
            _ => out.push(block),
        }
    }
    out
}

fn merge_all(line: usize, sorted: &[AlignBlock]) -> Vec<AlignBlock> {
    let start = sorted.iter().map(|b| b.start_char).min();
    let end = sorted.iter().map(|b| b.end_char).max();
    match (start, end) {
        (Some(start), Some(end)) => vec![AlignBlock::new(line, start, end)],
        _ => Vec::new(),
    }
}
