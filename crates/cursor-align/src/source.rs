//! The Text Source collaborator.
//!
//! The engine never owns the buffer and never asks for "the current editor". The host passes a
//! [`TextSource`] explicitly; everything the engine reads comes from it, and the only writes are
//! one batch of inserts followed by one selection update.

use crate::error::AlignError;
use crate::planner::SpaceInsert;
use crate::selection::Selection;

/// Read-only text queries against an immutable snapshot.
pub trait LineText {
    /// Text of `start_char..end_char` on `line`.
    ///
    /// Offsets past the end of the line are clamped. A missing line reads as empty text.
    fn text_of_range(&self, line: usize, start_char: usize, end_char: usize) -> String;

    /// Current display tab width, in columns.
    fn tab_width(&self) -> usize;
}

/// A host buffer the engine can align.
///
/// Hosts must take the snapshot (`selections` plus `text_of_range`) before planning, apply the
/// whole plan with a single [`TextSource::apply_inserts`] call, and only then call
/// [`TextSource::set_selections`]. If the batch is rejected the plan is stale and must be
/// discarded, never partially applied.
pub trait TextSource: LineText {
    /// Snapshot of the current selections.
    fn selections(&self) -> Vec<Selection>;

    /// Apply every insert atomically.
    ///
    /// Offsets in `inserts` refer to the snapshot the plan was computed from, not to the text
    /// as it changes while the batch is applied. Implementations either apply all of them or
    /// none.
    fn apply_inserts(&mut self, inserts: &[SpaceInsert]) -> Result<(), AlignError>;

    /// Replace the selections after a successful [`TextSource::apply_inserts`].
    fn set_selections(&mut self, selections: Vec<Selection>);
}
