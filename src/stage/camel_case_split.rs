use crate::stage::{Stage, StageError};
use std::borrow::Cow;

/// Opens a word boundary in front of every ASCII upper-case hump.
///
/// `fooBarBaz` becomes `foo bar baz`: the capital that marks a hump is turned
/// into a separator plus its lower-case letter, so the chunking that follows
/// sees ordinary words. A capital at the start of the text or right after a
/// space is not a hump and keeps its case. The result is trimmed and runs of
/// spaces are collapsed to one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseSplit;

impl Stage for CamelCaseSplit {
    fn name(&self) -> &'static str {
        "camel_case_split"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        if text.trim().len() != text.len() {
            return Ok(true);
        }
        Ok(text.as_bytes().windows(2).any(|w| match (w[0], w[1]) {
            (b' ', b' ') => true,
            (prev, c) => c.is_ascii_uppercase() && prev != b' ',
        }))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let trimmed = text.trim();
        let mut out = String::with_capacity(trimmed.len() + trimmed.len() / 4);
        let mut prev: Option<char> = None;

        for c in trimmed.chars() {
            match (prev, c) {
                (Some(' '), ' ') => continue,
                (Some(p), c) if c.is_ascii_uppercase() && p != ' ' => {
                    out.push(' ');
                    out.push(c.to_ascii_lowercase());
                    prev = Some(c);
                    continue;
                }
                _ => {}
            }
            out.push(c);
            prev = Some(c);
        }

        if out == *text {
            Ok(text)
        } else {
            Ok(Cow::Owned(out))
        }
    }
}
