use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while aligning.
///
/// Planning itself cannot fail; these come from the host boundary and from loading options.
pub enum AlignError {
    #[error("edit rejected by host: {reason}")]
    /// The host refused the insert batch (for example the buffer changed concurrently).
    EditRejected {
        /// Host supplied explanation.
        reason: String,
    },

    #[error("stale insert at line {line}, column {column}")]
    /// An insert points outside the current text, so the plan was computed from another snapshot.
    StaleInsert {
        /// Logical line index of the insert.
        line: usize,
        /// Character column of the insert.
        column: usize,
    },

    #[error("invalid align options: {0}")]
    /// Options JSON failed to parse.
    InvalidOptions(#[from] serde_json::Error),
}

impl AlignError {
    /// Shorthand for [`AlignError::EditRejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        AlignError::EditRejected {
            reason: reason.into(),
        }
    }
}
