//! Alignment entry points.
//!
//! [`AlignEngine::plan`] is a pure function of a snapshot. [`AlignEngine::align`] runs the
//! whole command against a [`TextSource`]: plan, apply the inserts as one batch, then move the
//! selections onto the aligned spans.

use crate::blocks::{LineBlocks, build_blocks};
use crate::columns::resolve_columns;
use crate::error::AlignError;
use crate::options::AlignOptions;
use crate::planner::{AlignPlan, plan_insertions};
use crate::selection::Selection;
use crate::source::{LineText, TextSource};
use crate::span::{CodePointSpan, ColumnSpan};
use tracing::{debug, warn};

/// What [`AlignEngine::align`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignOutcome {
    /// Fewer than two lines carry a selection; nothing to align against.
    NotEnoughLines,
    /// Every block already sits at its column's width; the buffer was not touched.
    AlreadyAligned,
    /// Spaces were inserted and the selections moved.
    Aligned {
        /// Total number of spaces inserted.
        inserted_spaces: usize,
        /// Selections set on the source after the edit.
        selections: Vec<Selection>,
    },
}

/// Multi-cursor alignment engine.
///
/// The span function is a type parameter so hosts rendering on a cell grid can swap in
/// [`crate::CellSpan`].
#[derive(Debug, Clone, Default)]
pub struct AlignEngine<W = CodePointSpan> {
    options: AlignOptions,
    span: W,
}

impl AlignEngine<CodePointSpan> {
    /// Create an engine using [`CodePointSpan`] widths.
    pub fn new(options: AlignOptions) -> Self {
        Self {
            options,
            span: CodePointSpan,
        }
    }
}

impl<W: ColumnSpan> AlignEngine<W> {
    /// Create an engine with a custom span function.
    pub fn with_span(options: AlignOptions, span: W) -> Self {
        Self { options, span }
    }

    /// The engine's options.
    pub fn options(&self) -> &AlignOptions {
        &self.options
    }

    /// Plan the alignment of `selections` over `text`.
    ///
    /// Returns an empty plan when fewer than two lines carry a selection.
    pub fn plan_selections<T>(&self, selections: &[Selection], text: &T) -> AlignPlan
    where
        T: LineText + ?Sized,
    {
        let lines = build_blocks(selections, self.options.block_policy);
        if lines.len() < 2 {
            return AlignPlan::default();
        }
        self.plan_lines(&lines, text)
    }

    /// Plan the alignment of the source's current selections.
    pub fn plan<S>(&self, source: &S) -> AlignPlan
    where
        S: TextSource + ?Sized,
    {
        self.plan_selections(&source.selections(), source)
    }

    /// Align the source's selections in place.
    ///
    /// The source is only touched when there is something to insert. If the host rejects the
    /// batch, the error is returned as is and the selections are left alone; the plan must not
    /// be retried against the changed buffer.
    pub fn align<S>(&self, source: &mut S) -> Result<AlignOutcome, AlignError>
    where
        S: TextSource + ?Sized,
    {
        let selections = source.selections();
        let lines = build_blocks(&selections, self.options.block_policy);
        if lines.len() < 2 {
            debug!(lines = lines.len(), "not enough lines to align");
            return Ok(AlignOutcome::NotEnoughLines);
        }

        let plan = self.plan_lines(&lines, &*source);
        if plan.is_noop() {
            debug!("selections already aligned");
            return Ok(AlignOutcome::AlreadyAligned);
        }

        if let Err(err) = source.apply_inserts(&plan.inserts) {
            warn!(error = %err, "alignment edit rejected");
            return Err(err);
        }

        let inserted_spaces = plan.inserted_spaces();
        source.set_selections(plan.selections.clone());

        Ok(AlignOutcome::Aligned {
            inserted_spaces,
            selections: plan.selections,
        })
    }

    fn plan_lines<T>(&self, lines: &[LineBlocks], text: &T) -> AlignPlan
    where
        T: LineText + ?Sized,
    {
        let tab_width = self.options.tab_width.unwrap_or_else(|| text.tab_width());
        let layout = resolve_columns(lines, text, &self.span, tab_width);
        let plan = plan_insertions(&layout);

        debug!(
            lines = lines.len(),
            columns = layout.columns.len(),
            inserts = plan.inserts.len(),
            spaces = plan.inserted_spaces(),
            "planned alignment"
        );
        plan
    }
}

/// Align the source's selections with default options.
pub fn align_cursors<S>(source: &mut S) -> Result<AlignOutcome, AlignError>
where
    S: TextSource + ?Sized,
{
    AlignEngine::new(AlignOptions::default()).align(source)
}
