use std::collections::BTreeMap;

use crate::error::{normalize, Result};

/// One node per letter of a stored word. The child map is keyed by letter,
/// so a node can never carry two edges for the same character. Each node is
/// owned exclusively by its parent; the trie owns the root.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    pub(crate) fn is_word(&self) -> bool {
        self.is_word
    }

    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = (&char, &TrieNode)> {
        self.children.iter()
    }
}

/// Lexicon index: exact membership, prefix enumeration, and full traversal.
///
/// Invariant: a node's `is_word` flag is true iff the letters on the path
/// from the root spell a dictionary entry.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Insert a word, lowercased. Inserting a word that is already present
    /// is a no-op.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let word = normalize(word)?;

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }

        Ok(())
    }

    /// Exact membership: the full path must exist and end on a word node. A
    /// word that is only a prefix of a stored word is not a member.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.is_word)
    }

    /// All stored words under `prefix`, lexicographically. The iterator is
    /// lazy; calling this again restarts the enumeration. A prefix with no
    /// path in the trie yields nothing.
    pub fn words_with_prefix(&self, prefix: &str) -> WordsWithPrefix<'_> {
        let prefix = prefix.to_lowercase();
        match self.walk(&prefix) {
            Some(node) => WordsWithPrefix::new(node, prefix),
            None => WordsWithPrefix::empty(),
        }
    }

    /// Full lexicographic traversal. Used for index construction, not on the
    /// query path.
    pub fn all_words(&self) -> WordsWithPrefix<'_> {
        WordsWithPrefix::new(&self.root, String::new())
    }

    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }

    fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

/// Depth-first traversal over complete words, driven by an explicit stack so
/// depth stays bounded by the longest stored word.
pub struct WordsWithPrefix<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> WordsWithPrefix<'a> {
    fn new(start: &'a TrieNode, prefix: String) -> Self {
        Self {
            stack: vec![(start, prefix)],
        }
    }

    fn empty() -> Self {
        Self { stack: Vec::new() }
    }
}

impl Iterator for WordsWithPrefix<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, path)) = self.stack.pop() {
            // Children go on the stack in reverse so the smallest letter
            // pops first; a word node is yielded before its descendants,
            // which keeps the whole stream lexicographic.
            for (&ch, child) in node.children().rev() {
                let mut next = path.clone();
                next.push(ch);
                self.stack.push((child, next));
            }

            if node.is_word {
                return Some(path);
            }
        }

        None
    }
}
