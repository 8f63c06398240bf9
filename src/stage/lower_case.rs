use crate::stage::{Stage, StageError};
use std::borrow::Cow;

/// ASCII lower-casing for output tokens.
///
/// Locale-invariant on purpose: only `A-Z` are touched, matching the fold the
/// cost model uses for lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.bytes().any(|b| b.is_ascii_uppercase()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text)? {
            return Ok(text);
        }
        Ok(Cow::Owned(text.to_ascii_lowercase()))
    }
}
