use serde::Serialize;
use tracing::debug;

use crate::trie::Trie;

/// Default number of predictions returned for a single prefix.
pub const PREDICTION_LIMIT: usize = 20;

/// Answers prefix queries against a trie that has already been built.
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'t> {
    trie: &'t Trie,
    limit: usize,
}

impl<'t> Predictor<'t> {
    pub fn new(trie: &'t Trie) -> Self {
        Self {
            trie,
            limit: PREDICTION_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the words starting with `prefix`, at most `limit` of them.
    ///
    /// The prefix must already be lowercased. An empty prefix, or one that no
    /// inserted word starts with, yields no predictions.
    pub fn query(&self, prefix: &str) -> Predictions {
        let words = self
            .trie
            .lookup_prefix(prefix)
            .map(|node| Trie::enumerate(node, prefix, self.limit))
            .unwrap_or_default();
        debug!("Query {:?} matched {} words", prefix, words.len());

        Predictions {
            prefix: prefix.to_owned(),
            words,
            capacity: self.limit,
        }
    }
}

/// The result of a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predictions {
    /// The prefix that was queried.
    pub prefix: String,
    /// Matching words in traversal order.
    pub words: Vec<String>,
    #[serde(skip)]
    capacity: usize,
}

impl Predictions {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every slot of the fixed-size result buffer: the matches first, then
    /// empty strings for the slots nothing filled.
    pub fn padded(&self) -> impl Iterator<Item = &str> {
        let unused = self.capacity.saturating_sub(self.words.len());
        self.words
            .iter()
            .map(String::as_str)
            .chain(std::iter::repeat("").take(unused))
    }
}
