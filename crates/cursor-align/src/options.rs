//! Alignment configuration.
//!
//! Options are plain data so hosts can load them from their own settings. Keys are camelCase
//! and every key is optional:
//!
//! ```rust
//! use cursor_align::{AlignOptions, BlockPolicy};
//!
//! let options = AlignOptions::from_json(r#"{ "blockPolicy": "merge", "tabWidth": 8 }"#).unwrap();
//! assert_eq!(options.block_policy, BlockPolicy::Merge);
//! assert_eq!(options.tab_width, Some(8));
//! ```

use crate::blocks::BlockPolicy;
use crate::error::AlignError;
use serde::{Deserialize, Serialize};

/// Alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlignOptions {
    /// How several selections on one line are grouped into blocks.
    pub block_policy: BlockPolicy,
    /// Tab width override. `None` uses [`crate::LineText::tab_width`] of the text source.
    pub tab_width: Option<usize>,
}

impl AlignOptions {
    /// Parse options from a JSON settings object.
    pub fn from_json(json: &str) -> Result<Self, AlignError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the block policy.
    pub fn with_block_policy(mut self, policy: BlockPolicy) -> Self {
        self.block_policy = policy;
        self
    }

    /// Override the tab width reported by the text source.
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = Some(tab_width);
        self
    }
}
