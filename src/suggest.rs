use serde::Serialize;
use std::collections::HashMap;

use crate::phonetic::{self, PhoneticIndex};
use crate::trie::{Trie, TrieNode};

pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// A ranked correction: the word, its Levenshtein distance to the query, and
/// whether it shares the query's phonetic code. Transient; produced per query
/// and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub word: String,
    pub distance: usize,
    pub phonetic_match: bool,
}

/// Orchestrates the trie and the phonetic index for one dictionary snapshot.
pub struct SuggestionEngine<'a> {
    trie: &'a Trie,
    index: &'a PhoneticIndex,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(trie: &'a Trie, index: &'a PhoneticIndex) -> Self {
        Self { trie, index }
    }

    /// Produce ranked corrections for `word`, which must already be
    /// normalized to lowercase letters.
    ///
    /// Candidates come from two sources: a bounded edit-distance walk of the
    /// trie, and the phonetic bucket for the word's code. Bucket words
    /// surface even when their distance exceeds `max_edit_distance`, so
    /// "sounds-like" misspellings survive the distance bound. The merged set
    /// is sorted by distance, then phonetic matches first, then
    /// alphabetically, and truncated to `max_results`.
    pub fn suggest(
        &self,
        word: &str,
        max_edit_distance: usize,
        max_results: usize,
    ) -> Vec<Candidate> {
        if max_results == 0 {
            return Vec::new();
        }

        let query: Vec<char> = word.chars().collect();
        let mut candidates = self.bounded_search(&query, max_edit_distance);

        if let Ok(code) = phonetic::encode(word) {
            let bucket = self.index.lookup(&code);

            // Index the trie-walk results once so merging a large bucket
            // stays linear in its size.
            let by_word: HashMap<&str, usize> = candidates
                .iter()
                .enumerate()
                .map(|(i, c)| (c.word.as_str(), i))
                .collect();

            let mut flagged = Vec::new();
            let mut rescued = Vec::new();
            for other in bucket {
                match by_word.get(other.as_str()) {
                    Some(&i) => flagged.push(i),
                    None => rescued.push(Candidate {
                        word: other.clone(),
                        distance: edit_distance(word, other),
                        phonetic_match: true,
                    }),
                }
            }

            for i in flagged {
                candidates[i].phonetic_match = true;
            }
            candidates.extend(rescued);
        }

        candidates.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.phonetic_match.cmp(&a.phonetic_match))
                .then_with(|| a.word.cmp(&b.word))
        });
        candidates.truncate(max_results);
        candidates
    }

    /// Depth-first walk of the trie carrying one Levenshtein DP row per
    /// prefix. A branch is pruned as soon as the smallest value in its row
    /// exceeds the bound, so cost stays proportional to the lexicon near the
    /// query. Explicit stack; depth is bounded by the longest stored word.
    fn bounded_search(&self, query: &[char], max_distance: usize) -> Vec<Candidate> {
        let n = query.len();
        let first_row: Vec<usize> = (0..=n).collect();

        let mut found = Vec::new();
        let mut stack: Vec<(&TrieNode, String, Vec<usize>)> =
            vec![(self.trie.root(), String::new(), first_row)];

        while let Some((node, path, row)) = stack.pop() {
            if node.is_word() && row[n] <= max_distance {
                found.push(Candidate {
                    word: path.clone(),
                    distance: row[n],
                    phonetic_match: false,
                });
            }

            for (&ch, child) in node.children() {
                let next_row = advance_row(&row, query, ch);
                let reachable = next_row.iter().min().copied().unwrap_or(0);
                if reachable <= max_distance {
                    let mut next_path = path.clone();
                    next_path.push(ch);
                    stack.push((child, next_path, next_row));
                }
            }
        }

        found
    }
}

/// Extend a DP row by one trie letter: `row[j]` is the distance between the
/// current trie prefix and the first `j` letters of the query.
fn advance_row(prev: &[usize], query: &[char], ch: char) -> Vec<usize> {
    let mut row = Vec::with_capacity(prev.len());
    row.push(prev[0] + 1);

    for (j, &qc) in query.iter().enumerate() {
        let cost = usize::from(qc != ch);
        let value = (row[j] + 1) // insertion
            .min(prev[j + 1] + 1) // deletion
            .min(prev[j] + cost); // substitution
        row.push(value);
    }

    row
}

/// Full Levenshtein distance, used for phonetic-bucket words the bounded
/// search never reached.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, &a_ch) in a_chars.iter().enumerate() {
        let mut row = Vec::with_capacity(prev.len());
        row.push(i + 1);

        for (j, &b_ch) in b_chars.iter().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            row.push((row[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost));
        }

        prev = row;
    }

    prev[b_chars.len()]
}
