pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod phonetic;
pub mod suggest;
pub mod trie;
pub mod wordlist;

pub use config::Config;
pub use dictionary::{Dictionary, LoadReport};
pub use error::SpellError;
pub use suggest::{Candidate, DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_MAX_RESULTS};
pub use trie::Trie;

use serde::Serialize;

/// Outcome of checking a batch of words against one dictionary.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub checked: usize,
    pub misspellings: Vec<Misspelling>,
}

/// One flagged word with its ranked corrections.
#[derive(Debug, Clone, Serialize)]
pub struct Misspelling {
    pub word: String,
    pub suggestions: Vec<Candidate>,
}
