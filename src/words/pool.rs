//! Word reference data.
//!
//! A `WordPool` is loaded once at startup and shared read-only by every
//! room (behind an `Arc`). Each round picks the `WordSet` at
//! `round_number % len`.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

/// Interchangeable spellings of one word, e.g. anagrams.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    /// Build a word set, dropping repeated spellings.
    ///
    /// Fails with `InvalidWordPool` unless at least two distinct
    /// spellings remain.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for word in words {
            let word = word.into();
            if !distinct.contains(&word) {
                distinct.push(word);
            }
        }

        if distinct.len() < 2 {
            return Err(GameError::word_pool(format!(
                "word set {distinct:?} needs at least two distinct spellings"
            )));
        }

        Ok(Self { words: distinct })
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Ordered, non-empty list of word sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPool {
    sets: Vec<WordSet>,
}

impl WordPool {
    /// Build a pool, re-checking every set.
    pub fn new(sets: Vec<WordSet>) -> Result<Self> {
        if sets.is_empty() {
            return Err(GameError::word_pool("word pool is empty"));
        }

        let sets = sets
            .into_iter()
            .map(|set| WordSet::new(set.words))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { sets })
    }

    /// The built-in pool.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            sets: vec![WordSet {
                words: ["sale", "seal", "ales", "leas"].map(String::from).to_vec(),
            }],
        }
    }

    /// Parse a JSON array of `{ "words": [...] }` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let sets: Vec<WordSet> = serde_json::from_str(json)?;
        Self::new(sets)
    }

    /// Word set used for `round_number`.
    #[must_use]
    pub fn for_round(&self, round_number: u32) -> &WordSet {
        &self.sets[round_number as usize % self.sets.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Always false; an empty pool cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self::reference()
    }
}
