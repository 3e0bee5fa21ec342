#![warn(missing_docs)]
//! Cursor Align - Headless Multi-Cursor Alignment Engine
//!
//! # Overview
//!
//! `cursor-align` computes the whitespace inserts that line up cursors and selections placed on
//! different lines, and the selections to restore once the spaces are in. It never owns the
//! text: the host hands over a [`TextSource`] and applies the resulting plan as a single batch.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Selections                                  │  ← Host snapshot
//! ├──────────────────────────────────────────────┤
//! │  Block Builder      (blocks)                 │  ← Per-line anchors
//! ├──────────────────────────────────────────────┤
//! │  Column Resolver    (columns + span)         │  ← Tab-aware widths
//! ├──────────────────────────────────────────────┤
//! │  Insertion Planner  (planner)                │  ← Space inserts + selections
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Data only flows forward; each stage returns an immutable value for the next one.
//!
//! # Quick Start
//!
//! ```rust
//! use cursor_align::{AlignOutcome, Position, Selection, TextBuffer, align_cursors};
//!
//! let mut buffer = TextBuffer::new("let a = 1;\nlet bbb = 2;").with_selections(vec![
//!     Selection::caret(Position::new(0, 6)),
//!     Selection::caret(Position::new(1, 8)),
//! ]);
//!
//! let outcome = align_cursors(&mut buffer).unwrap();
//! assert!(matches!(outcome, AlignOutcome::Aligned { inserted_spaces: 2, .. }));
//! assert_eq!(buffer.text(), "let a   = 1;\nlet bbb = 2;");
//! ```
//!
//! # Module Description
//!
//! - [`blocks`] - selections to ordered per-line blocks
//! - [`span`] - approximate visual widths (code points, cells, tabs)
//! - [`columns`] - positional columns and multi-pass width resolution
//! - [`planner`] - space inserts and final selections
//! - [`engine`] - the align command against a [`TextSource`]
//! - [`buffer`] - rope-backed reference [`TextSource`]
//!
//! # Width Model
//!
//! Rendered width cannot be known without fonts and grapheme data. By default every code point
//! counts as one column and a tab advances to the next tab stop. This is a documented
//! approximation, not a bug. [`CellSpan`] switches to UAX #11 cell widths.

pub mod blocks;
pub mod buffer;
pub mod columns;
pub mod engine;
mod error;
pub mod options;
pub mod planner;
mod selection;
pub mod source;
pub mod span;

pub use blocks::{AlignBlock, BlockPolicy, LineBlocks, build_blocks};
pub use buffer::TextBuffer;
pub use columns::{ColumnLayout, ResolvedBlock, ResolvedLine, TableColumn, resolve_columns};
pub use engine::{AlignEngine, AlignOutcome, align_cursors};
pub use error::AlignError;
pub use options::AlignOptions;
pub use planner::{AlignPlan, SpaceInsert, plan_insertions};
pub use selection::{Position, Selection};
pub use source::{LineText, TextSource};
pub use span::{
    CellSpan, CodePointSpan, ColumnSpan, DEFAULT_TAB_WIDTH, column_span, column_span_utf16,
};
