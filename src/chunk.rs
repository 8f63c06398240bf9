//! Separator pre-split.
//!
//! Raw text is cut on runs of anything that is not an ASCII letter, ASCII
//! digit, or apostrophe. Each surviving chunk is handed to the segmenter on
//! its own.

#[inline(always)]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'\''
}

/// Iterator over the non-empty word-like chunks of a text.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    pos: usize,
}

pub fn chunks(text: &str) -> Chunks<'_> {
    Chunks { text, pos: 0 }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        let start = self.pos + bytes[self.pos..].iter().position(|&b| is_word_byte(b))?;
        let end = bytes[start..]
            .iter()
            .position(|&b| !is_word_byte(b))
            .map_or(bytes.len(), |len| start + len);
        self.pos = end;
        // Word bytes are ASCII, so both ends sit on char boundaries.
        Some(&self.text[start..end])
    }
}

impl std::iter::FusedIterator for Chunks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        chunks(text).collect()
    }

    #[test]
    fn splits_on_separator_runs() {
        assert_eq!(collect("hello, world!"), ["hello", "world"]);
        assert_eq!(collect("snake_case-and.dots"), ["snake", "case", "and", "dots"]);
    }

    #[test]
    fn keeps_apostrophes_and_digits() {
        assert_eq!(collect("it's 2023"), ["it's", "2023"]);
    }

    #[test]
    fn skips_leading_and_trailing_separators() {
        assert_eq!(collect("  --abc--  "), ["abc"]);
        assert!(collect("").is_empty());
        assert!(collect(" -_- ").is_empty());
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(collect("caféau"), ["caf", "au"]);
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut it = chunks("a b");
        assert_eq!(it.next(), Some("a"));
        assert_eq!(it.next(), Some("b"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
