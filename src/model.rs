//! Rank-based cost model.
//!
//! Every dictionary word gets a cost derived from its frequency rank:
//!
//! ```text
//! cost(word) = ln((rank + 1) * ln(W))
//! ```
//!
//! where `rank` is the 0-based position in a best-first list of `W` words.
//! Common words are cheap, rare words grow logarithmically more expensive.
//! Words added later through [`CostModel::extend`] all receive the cheapest
//! cost seen during loading, so injected vocabulary always wins a tie against
//! the shipped dictionary.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("cannot build a cost model from an empty dictionary")]
    EmptyDictionary,
}

/// Read-many / write-rare handle shared between splitters and threads.
pub type SharedModel = Arc<RwLock<CostModel>>;

#[derive(Debug, Clone)]
pub struct CostModel {
    costs: FxHashMap<String, f64>,
    max_word_len: usize,
    max_cost: f64,
}

impl CostModel {
    /// Build a model from words ordered most-frequent first.
    ///
    /// Duplicates are tolerated; the later rank overwrites the earlier one.
    pub fn from_ranked<I, S>(words: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        if words.is_empty() {
            return Err(ModelError::EmptyDictionary);
        }

        // ln(1) == 0 would send the single entry to -inf.
        let scale = (words.len().max(2) as f64).ln();

        let mut costs = FxHashMap::with_capacity_and_hasher(words.len(), Default::default());
        let mut max_word_len = 0;
        let mut max_cost = f64::INFINITY;

        for (rank, word) in words.iter().enumerate() {
            let word = word.as_ref().to_ascii_lowercase();
            let cost = ((rank + 1) as f64 * scale).ln();
            max_word_len = max_word_len.max(word.chars().count());
            if cost < max_cost {
                max_cost = cost;
            }
            costs.insert(word, cost);
        }

        debug!(
            words = costs.len(),
            max_word_len, max_cost, "built cost model from ranked list"
        );

        Ok(Self {
            costs,
            max_word_len,
            max_cost,
        })
    }

    /// Wrap the model in a [`SharedModel`] handle.
    pub fn into_shared(self) -> SharedModel {
        Arc::new(RwLock::new(self))
    }

    /// Add a single word at the current `max_cost`.
    pub fn extend_one(&mut self, word: &str) {
        let word = word.to_ascii_lowercase();
        self.max_word_len = self.max_word_len.max(word.chars().count());
        trace!(%word, cost = self.max_cost, "extending cost model");
        self.costs.insert(word, self.max_cost);
    }

    /// Add several words at the current `max_cost`. `max_cost` itself never moves.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.extend_one(word.as_ref());
        }
    }

    /// Cost of `word`, or `None` when it is not a known word.
    ///
    /// Lookup folds ASCII case; callers on the hot path that already hold a
    /// lower-cased key should use [`CostModel::cost_of_folded`].
    pub fn cost_of(&self, word: &str) -> Option<f64> {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.cost_of_folded(&word.to_ascii_lowercase())
        } else {
            self.cost_of_folded(word)
        }
    }

    #[inline]
    pub fn cost_of_folded(&self, word: &str) -> Option<f64> {
        self.costs.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.cost_of(word).is_some()
    }

    /// Longest known word in characters; bounds the DP lookback window.
    #[inline]
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Cheapest cost seen while loading; assigned to every extended word.
    #[inline]
    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
