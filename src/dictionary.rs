use serde::Serialize;

use crate::error::{normalize, Result, SpellError};
use crate::phonetic::PhoneticIndex;
use crate::suggest::{Candidate, SuggestionEngine};
use crate::trie::{Trie, WordsWithPrefix};

/// How a load went: entries rejected with `InvalidInput` are counted here,
/// never fatal to the load itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub accepted: usize,
    pub rejected: usize,
}

/// Aggregate root owning the trie and the phonetic index.
///
/// Immutable once built: `check` and `suggest` touch no shared mutable
/// state, so a `Dictionary` can be queried concurrently from any number of
/// threads. Growing the vocabulary means loading a fresh snapshot and
/// swapping the handle readers observe.
#[derive(Debug)]
pub struct Dictionary {
    trie: Trie,
    index: PhoneticIndex,
    report: LoadReport,
}

impl Dictionary {
    /// Build the trie and the phonetic index from one finite word
    /// collection. Malformed entries are rejected per-entry and counted in
    /// the [`LoadReport`]; if no valid word remains the load fails with
    /// `EmptyDictionary`.
    pub fn load<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        let mut report = LoadReport::default();

        for raw in words {
            match normalize(raw.as_ref()) {
                Ok(word) => {
                    trie.insert(&word)?;
                    report.accepted += 1;
                }
                // Only `InvalidInput` can come out of `normalize`.
                Err(_) => report.rejected += 1,
            }
        }

        if trie.is_empty() {
            return Err(SpellError::EmptyDictionary);
        }

        let index = PhoneticIndex::build(trie.all_words())?;

        Ok(Self {
            trie,
            index,
            report,
        })
    }

    /// Is `word` correctly spelled? Case-insensitive; non-alphabetic input
    /// is `InvalidInput`.
    pub fn check(&self, word: &str) -> Result<bool> {
        let word = normalize(word)?;
        Ok(self.trie.contains(&word))
    }

    /// Ranked corrections for `word`; empty when nothing plausible is found.
    pub fn suggest(
        &self,
        word: &str,
        max_edit_distance: usize,
        max_results: usize,
    ) -> Result<Vec<Candidate>> {
        let word = normalize(word)?;
        let engine = SuggestionEngine::new(&self.trie, &self.index);
        Ok(engine.suggest(&word, max_edit_distance, max_results))
    }

    /// Dictionary words under `prefix`, lexicographically.
    pub fn words_with_prefix(&self, prefix: &str) -> WordsWithPrefix<'_> {
        self.trie.words_with_prefix(prefix)
    }

    /// Number of distinct words loaded.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Always false for a constructed dictionary; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Accepted/rejected counts from construction.
    pub fn load_report(&self) -> LoadReport {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::{DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_MAX_RESULTS};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_load_rejects_empty_collection() {
        let words: Vec<&str> = Vec::new();
        assert_eq!(
            Dictionary::load(words).unwrap_err(),
            SpellError::EmptyDictionary
        );
    }

    #[test]
    fn test_load_counts_accepted_and_rejected() {
        let dict = Dictionary::load(["cat", "", "DOG", "3og"]).unwrap();
        assert_eq!(
            dict.load_report(),
            LoadReport {
                accepted: 2,
                rejected: 2,
            }
        );
        assert_eq!(dict.len(), 2);
        assert!(dict.check("dog").unwrap());
        assert!(dict.check("cat").unwrap());
    }

    #[test]
    fn test_load_fails_when_every_entry_is_rejected() {
        assert_eq!(
            Dictionary::load(["", "1", "2"]).unwrap_err(),
            SpellError::EmptyDictionary
        );
    }

    #[test]
    fn test_check_normalizes_case() {
        let dict = Dictionary::load(["cat"]).unwrap();
        assert!(dict.check("CAT").unwrap());
        assert!(!dict.check("kat").unwrap());
        assert_eq!(
            dict.check("c4t"),
            Err(SpellError::InvalidInput("c4t".into()))
        );
    }

    #[test]
    fn test_suggest_delegates_to_engine() {
        let dict = Dictionary::load(["cat", "bat", "hat", "cot", "dog"]).unwrap();
        let result = dict
            .suggest("KAT", DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_MAX_RESULTS)
            .unwrap();
        assert_eq!(result[0].word, "cat");
        assert_eq!(result[0].distance, 1);
    }

    #[test]
    fn test_words_with_prefix() {
        let dict = Dictionary::load(["cat", "car", "dog"]).unwrap();
        let words: Vec<String> = dict.words_with_prefix("ca").collect();
        assert_eq!(words, vec!["car", "cat"]);
    }

    #[test]
    fn test_concurrent_queries() {
        let dict = Arc::new(
            Dictionary::load(["cat", "bat", "hat", "cot", "dog", "phone"]).unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dict = Arc::clone(&dict);
                thread::spawn(move || {
                    for _ in 0..100 {
                        assert!(dict.check("cat").unwrap());
                        let result = dict.suggest("fone", 2, 5).unwrap();
                        assert_eq!(result[0].word, "phone");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
