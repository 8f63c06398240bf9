use crate::stage::{Stage, StageError};
use std::borrow::Cow;

/// Upper-cases the first character of a token, leaving the rest as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizeFirstLetter;

impl Stage for CapitalizeFirstLetter {
    fn name(&self) -> &'static str {
        "capitalize_first_letter"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text
            .chars()
            .next()
            .is_some_and(|c| !c.to_uppercase().eq(std::iter::once(c))))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text)? {
            return Ok(text);
        }
        let mut chars = text.chars();
        let mut out = String::with_capacity(text.len() + 2);
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
        }
        out.push_str(chars.as_str());
        Ok(Cow::Owned(out))
    }
}
