//! Minimum-cost word segmentation.
//!
//! A token of `n` characters is treated as a DAG over positions `0..=n`: an
//! edge `i-k → i` exists for every `k` inside the lookback window and weighs
//! the cost of the substring it spans. The forward pass computes the cheapest
//! path to every position, the backward pass walks the winning edges from `n`
//! to `0` and emits one token per edge.
//!
//! Positions are Unicode scalar values, never bytes, so arbitrary input is
//! safe to slice.

use crate::model::CostModel;

/// Penalty per character of a substring that is not a known word.
///
/// Any known word costs far less than this per character, so known words
/// always win over unknown spans. Charging per character (rather than per
/// span) stops an unknown span from swallowing its known neighbours; runs of
/// unknown characters fall back to single-character tokens.
pub const UNKNOWN_CHAR_COST: f64 = 1e6;

/// Split a separator-free token into the most probable word sequence.
///
/// The returned tokens concatenate back to `input` exactly; the apostrophe
/// and digit heuristics only ever move a boundary, never characters.
pub fn split_words(model: &CostModel, input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    Lattice::build(model, input).tokens(input)
}

/// Total cost of the best segmentation of `input`; `0.0` for empty input.
pub fn best_cost(model: &CostModel, input: &str) -> f64 {
    if input.is_empty() {
        return 0.0;
    }
    let lattice = Lattice::build(model, input);
    lattice.cost[lattice.cost.len() - 1]
}

struct Lattice {
    /// Byte offset of every char boundary, `n + 1` entries.
    bounds: Vec<usize>,
    /// `cost[i]`: cheapest segmentation of the first `i` chars.
    cost: Vec<f64>,
    /// `step[i]`: length in chars of the last word on that path.
    step: Vec<usize>,
}

impl Lattice {
    fn build(model: &CostModel, input: &str) -> Self {
        // ASCII folding keeps byte offsets stable, so `bounds` indexes both strings.
        let folded = input.to_ascii_lowercase();

        let mut bounds: Vec<usize> = input.char_indices().map(|(at, _)| at).collect();
        bounds.push(input.len());
        let n = bounds.len() - 1;
        let window = model.max_word_len().max(1);

        let mut lattice = Self {
            bounds,
            cost: Vec::with_capacity(n + 1),
            step: Vec::with_capacity(n + 1),
        };
        lattice.cost.push(0.0);
        lattice.step.push(0);

        for i in 1..=n {
            let (cost, k) = lattice.best_match(model, &folded, i, window);
            lattice.cost.push(cost);
            lattice.step.push(k);
        }
        lattice
    }

    /// Cheapest edge into position `i`. Candidates are scanned from the
    /// shortest trailing word outward; a strict `<` keeps the shortest on ties.
    #[inline]
    fn best_match(
        &self,
        model: &CostModel,
        folded: &str,
        i: usize,
        window: usize,
    ) -> (f64, usize) {
        let mut best = (f64::INFINITY, 1);
        for k in 1..=i.min(window) {
            let word = &folded[self.bounds[i - k]..self.bounds[i]];
            let word_cost = model
                .cost_of_folded(word)
                .unwrap_or(UNKNOWN_CHAR_COST * k as f64);
            let candidate = self.cost[i - k] + word_cost;
            if candidate < best.0 {
                best = (candidate, k);
            }
        }
        best
    }

    fn tokens(&self, input: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let mut i = self.bounds.len() - 1;

        while i > 0 {
            let k = self.step[i];
            let token = &input[self.bounds[i - k]..self.bounds[i]];
            // `out` is built tail-first, so its last element is the token that
            // follows `token` in reading order.
            match out.last_mut() {
                Some(next) if joins_following(token, next) => next.insert_str(0, token),
                _ => out.push(token.to_owned()),
            }
            i -= k;
        }

        out.reverse();
        out
    }
}

/// Whether `token` should be glued onto the token that follows it.
fn joins_following(token: &str, next: &str) -> bool {
    if token == "'" || next.eq_ignore_ascii_case("'s") {
        return true;
    }
    let ends_in_digit = token.as_bytes().last().is_some_and(u8::is_ascii_digit);
    let next_starts_with_digit = next.as_bytes().first().is_some_and(u8::is_ascii_digit);
    ends_in_digit && next_starts_with_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(words: &[&str]) -> CostModel {
        CostModel::from_ranked(words.iter().copied()).unwrap()
    }

    #[test]
    fn splits_unambiguous_sentence() {
        let m = model(&["this", "is", "a", "test"]);
        assert_eq!(split_words(&m, "thisisatest"), ["this", "is", "a", "test"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        let m = model(&["a"]);
        assert!(split_words(&m, "").is_empty());
        assert_eq!(best_cost(&m, ""), 0.0);
    }

    #[test]
    fn equal_cost_keeps_shorter_trailing_word() {
        let mut m = model(&["zzzz", "yyy", "xxxxx"]);
        m.extend(["ab", "c", "a", "bc"]);
        // ab|c and a|bc both cost 2 * max_cost
        assert_eq!(best_cost(&m, "abc"), 2.0 * m.max_cost());
        assert_eq!(split_words(&m, "abc"), ["ab", "c"]);
    }

    #[test]
    fn keeps_original_case() {
        let m = model(&["hello", "world"]);
        assert_eq!(split_words(&m, "HelloWORLD"), ["Hello", "WORLD"]);
    }

    #[test]
    fn prefers_common_words() {
        // "the" + "rapist" vs "therapist": rank decides.
        let m = model(&["therapist", "the", "rapist"]);
        assert_eq!(split_words(&m, "therapist"), ["therapist"]);

        let m = model(&["the", "rapist", "therapist"]);
        assert_eq!(split_words(&m, "therapist"), ["the", "rapist"]);
    }

    #[test]
    fn digit_run_is_joined() {
        let m = model(&["a", "b"]);
        assert_eq!(split_words(&m, "2023"), ["2023"]);
    }

    #[test]
    fn digit_run_joined_even_with_short_window() {
        // window of one char forces single-digit edges; the merge glues them.
        let m = model(&["a", "b"]);
        assert_eq!(m.max_word_len(), 1);
        assert_eq!(split_words(&m, "1984"), ["1984"]);
    }

    #[test]
    fn digits_next_to_words() {
        let m = model(&["route", "a"]);
        assert_eq!(split_words(&m, "route66"), ["route", "66"]);
    }

    #[test]
    fn possessive_attaches_to_preceding_word() {
        let m = model(&["john", "s", "'s"]);
        assert_eq!(split_words(&m, "john's"), ["john's"]);
    }

    #[test]
    fn lone_apostrophe_attaches_forward() {
        let m = model(&["don", "t", "'"]);
        assert_eq!(split_words(&m, "don't"), ["don", "'t"]);
    }

    #[test]
    fn trailing_apostrophe_stands_alone() {
        let m = model(&["cats", "'"]);
        assert_eq!(split_words(&m, "cats'"), ["cats", "'"]);
    }

    #[test]
    fn unknown_input_still_reconstructs() {
        let m = model(&["abc"]);
        let tokens = split_words(&m, "zzzzzzz");
        assert_eq!(tokens.concat(), "zzzzzzz");
        assert_eq!(tokens, ["z"; 7]);
    }

    #[test]
    fn unknown_span_does_not_swallow_known_words() {
        let m = model(&["in", "the", "year"]);
        assert_eq!(split_words(&m, "inthe2023year"), ["in", "the", "2023", "year"]);
    }

    #[test]
    fn unknown_gap_between_known_words() {
        let m = model(&["hello", "world"]);
        assert_eq!(split_words(&m, "helloqworld"), ["hello", "q", "world"]);
    }

    #[test]
    fn extended_words_are_preferred() {
        let mut m = model(&["word", "ninja", "a", "b"]);
        assert_eq!(split_words(&m, "wordninja"), ["word", "ninja"]);
        m.extend_one("wordninja");
        assert_eq!(split_words(&m, "wordninja"), ["wordninja"]);
    }

    #[test]
    fn multibyte_input_is_safe() {
        let m = model(&["caf", "é"]);
        let tokens = split_words(&m, "cafécafé");
        assert_eq!(tokens.concat(), "cafécafé");
        assert_eq!(tokens, ["caf", "é", "caf", "é"]);
    }

    #[test]
    fn best_cost_is_sum_of_chosen_words() {
        let m = model(&["this", "is", "a", "test"]);
        let expected: f64 = ["this", "is", "a", "test"]
            .iter()
            .map(|w| m.cost_of(w).unwrap())
            .sum();
        assert!((best_cost(&m, "thisisatest") - expected).abs() < 1e-9);
    }

    #[test]
    fn joins_following_rules() {
        assert!(joins_following("'", "s"));
        assert!(joins_following("john", "'s"));
        assert!(joins_following("19", "84"));
        assert!(!joins_following("a1", "b"));
        assert!(!joins_following("ab", "1"));
        assert!(!joins_following("it", "is"));
    }
}
