//! Text transforms around the segmenter.
//!
//! A stage is a pure `Cow<str> → Cow<str>` step. Stages run in two places:
//! on the whole input before separator splitting (e.g. [`CamelCaseSplit`])
//! and on every emitted token afterwards (e.g. [`CapitalizeFirstLetter`]).
//! Each optional behaviour is its own stage, so they compose freely and can
//! be tested in isolation.
//!
//! Stages must be zero-copy when `needs_apply` returns `false`, and `apply`
//! must be idempotent.
//!
//! [`CamelCaseSplit`]: camel_case_split::CamelCaseSplit
//! [`CapitalizeFirstLetter`]: capitalize_first_letter::CapitalizeFirstLetter

pub mod camel_case_split;
pub mod capitalize_first_letter;
pub mod lower_case;

use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("stage `{0}` failed: {1}")]
    Failed(&'static str, String),
}

/// A single text transform.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in error messages and traces.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the stage entirely.
    fn needs_apply(&self, text: &str) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without consulting `needs_apply` first.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError>;
}
