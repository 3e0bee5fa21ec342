//! In-memory reference [`TextSource`].
//!
//! `TextBuffer` keeps its text in a rope, so line access and inserts are O(log N). Hosts with
//! their own buffer implement [`TextSource`] directly; this type is what tests, tools and
//! headless callers use.

use crate::error::AlignError;
use crate::planner::SpaceInsert;
use crate::selection::Selection;
use crate::source::{LineText, TextSource};
use crate::span::DEFAULT_TAB_WIDTH;
use ropey::Rope;

/// Rope-backed text buffer with a selection set.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    selections: Vec<Selection>,
    tab_width: usize,
    revision: u64,
}

impl TextBuffer {
    /// Build a buffer from text, with no selections and the default tab width.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: Vec::new(),
            tab_width: DEFAULT_TAB_WIDTH,
            revision: 0,
        }
    }

    /// Set the tab width.
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    /// Set the selections.
    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }

    /// Complete text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total line count (an empty buffer has one line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Number of successful edits applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Text of `line` without its line ending.
    pub fn line_text(&self, line: usize) -> Option<String> {
        let len = self.line_len(line)?;
        Some(self.rope.line(line).slice(..len).to_string())
    }

    /// Length of `line` in characters, excluding the line ending.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        Some(len)
    }

    /// Insert `text` at `column` on `line`, outside of any alignment.
    pub fn insert(&mut self, line: usize, column: usize, text: &str) -> Result<(), AlignError> {
        let offset = self.char_offset(line, column)?;
        self.rope.insert(offset, text);
        self.revision += 1;
        Ok(())
    }

    /// Delete `len` characters at `column` on `line`, outside of any alignment.
    pub fn delete(&mut self, line: usize, column: usize, len: usize) -> Result<(), AlignError> {
        let line_len = self.line_len(line).unwrap_or(0);
        let end = column.saturating_add(len).min(line_len);
        let start = self.char_offset(line, column)?;
        if column < end {
            self.rope.remove(start..start + (end - column));
            self.revision += 1;
        }
        Ok(())
    }

    fn char_offset(&self, line: usize, column: usize) -> Result<usize, AlignError> {
        match self.line_len(line) {
            Some(len) if column <= len => Ok(self.rope.line_to_char(line) + column),
            _ => Err(AlignError::StaleInsert { line, column }),
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl LineText for TextBuffer {
    fn text_of_range(&self, line: usize, start_char: usize, end_char: usize) -> String {
        let Some(len) = self.line_len(line) else {
            return String::new();
        };
        let start = start_char.min(len);
        let end = end_char.min(len).max(start);
        self.rope.line(line).slice(start..end).to_string()
    }

    fn tab_width(&self) -> usize {
        self.tab_width
    }
}

impl TextSource for TextBuffer {
    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn apply_inserts(&mut self, inserts: &[SpaceInsert]) -> Result<(), AlignError> {
        // Validate the whole batch first so a stale plan leaves the text untouched.
        let mut offsets = inserts
            .iter()
            .map(|insert| -> Result<(usize, usize), AlignError> {
                Ok((self.char_offset(insert.line, insert.column)?, insert.count))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Back to front keeps every snapshot offset valid while inserting.
        offsets.sort_by(|a, b| b.0.cmp(&a.0));
        for (offset, count) in offsets {
            if count > 0 {
                self.rope.insert(offset, &" ".repeat(count));
            }
        }

        if !inserts.is_empty() {
            self.revision += 1;
        }
        Ok(())
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections;
    }
}
