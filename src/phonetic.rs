//! Metaphone-style consonant-skeleton coding.
//!
//! The rule table is fixed and pinned by the golden tests below:
//!
//! 1. lowercase the word; runs of the same letter collapse to one;
//! 2. word-initial `kn`, `gn`, `wr` drop their first letter;
//! 3. digraphs anywhere: `ph` → `f`, `ck` → `k`, `sh` → `x`, `ch` → `x`,
//!    `th` → `t`, `wh` → `w`;
//! 4. single letters: `c` → `s` before `e`/`i`/`y`, else `k`; `g` → `j`
//!    before `e`/`i`/`y`, else `g`; `q` → `k`; `x` → `ks`; `z` → `s`;
//! 5. vowels are dropped, except a word-initial vowel which encodes as `a`;
//! 6. `h`, `w`, `y` are dropped unless word-initial.

use std::collections::HashMap;

use crate::error::{normalize, Result};

/// Opaque code derived deterministically from a word; two words with equal
/// codes are candidates for "sounds alike".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneticCode(String);

impl PhoneticCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Encode a word under the rule table above. Deterministic, case-insensitive,
/// and total over non-empty alphabetic input; `InvalidInput` otherwise.
pub fn encode(word: &str) -> Result<PhoneticCode> {
    let word = normalize(word)?;

    // Rule 1: collapse runs of the same letter.
    let mut letters: Vec<char> = Vec::with_capacity(word.len());
    for ch in word.chars() {
        if letters.last() != Some(&ch) {
            letters.push(ch);
        }
    }

    // Rule 2: silent word-initial consonants.
    let mut i = 0;
    if letters.len() >= 2 {
        if let ('k' | 'g', 'n') | ('w', 'r') = (letters[0], letters[1]) {
            i = 1;
        }
    }
    let start = i;

    let mut code = String::new();
    while i < letters.len() {
        let ch = letters[i];
        let next = letters.get(i + 1).copied();

        // Rule 3: digraphs take precedence over single-letter rules.
        let digraph = match (ch, next) {
            ('p', Some('h')) => Some('f'),
            ('c', Some('k')) => Some('k'),
            ('s', Some('h')) => Some('x'),
            ('c', Some('h')) => Some('x'),
            ('t', Some('h')) => Some('t'),
            ('w', Some('h')) => Some('w'),
            _ => None,
        };
        if let Some(out) = digraph {
            code.push(out);
            i += 2;
            continue;
        }

        match ch {
            // Rule 5.
            'a' | 'e' | 'i' | 'o' | 'u' => {
                if i == start {
                    code.push('a');
                }
            }
            // Rule 6.
            'h' | 'w' | 'y' => {
                if i == start {
                    code.push(ch);
                }
            }
            // Rule 4.
            'c' => code.push(if matches!(next, Some('e' | 'i' | 'y')) { 's' } else { 'k' }),
            'g' => code.push(if matches!(next, Some('e' | 'i' | 'y')) { 'j' } else { 'g' }),
            'q' => code.push('k'),
            'x' => code.push_str("ks"),
            'z' => code.push('s'),
            other => code.push(other),
        }
        i += 1;
    }

    Ok(PhoneticCode(code))
}

/// Mapping from phonetic code to the dictionary words sharing it. Built once
/// from the lexicon, read-only afterwards.
#[derive(Debug, Default)]
pub struct PhoneticIndex {
    buckets: HashMap<PhoneticCode, Vec<String>>,
}

impl PhoneticIndex {
    /// Build the index; construction cost is linear in total letters.
    pub fn build<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets: HashMap<PhoneticCode, Vec<String>> = HashMap::new();

        for word in words {
            let word = word.as_ref();
            let code = encode(word)?;
            let bucket = buckets.entry(code).or_default();
            if !bucket.iter().any(|w| w == word) {
                bucket.push(word.to_string());
            }
        }

        Ok(Self { buckets })
    }

    /// Words sharing `code`; empty when no bucket exists.
    pub fn lookup(&self, code: &PhoneticCode) -> &[String] {
        self.buckets.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpellError;

    fn code(word: &str) -> String {
        encode(word).unwrap().as_str().to_string()
    }

    #[test]
    fn test_golden_codes() {
        assert_eq!(code("cat"), "kt");
        assert_eq!(code("phone"), "fn");
        assert_eq!(code("city"), "st");
        assert_eq!(code("chat"), "xt");
        assert_eq!(code("knife"), "nf");
        assert_eq!(code("apple"), "apl");
    }

    #[test]
    fn test_sound_alike_pairs_collide() {
        assert_eq!(code("cat"), code("kat"));
        assert_eq!(code("phone"), code("fone"));
        assert_eq!(code("city"), code("sity"));
        assert_eq!(code("chat"), code("shat"));
        assert_eq!(code("phoney"), code("fone"));
    }

    #[test]
    fn test_encode_is_case_insensitive() {
        assert_eq!(encode("Phone").unwrap(), encode("pHONE").unwrap());
    }

    #[test]
    fn test_encode_rejects_empty_input() {
        assert_eq!(encode(""), Err(SpellError::InvalidInput(String::new())));
    }

    #[test]
    fn test_index_buckets_sound_alikes_together() {
        let index =
            PhoneticIndex::build(["cat", "kat", "dog", "cat"]).unwrap();
        let bucket = index.lookup(&encode("kat").unwrap());
        assert_eq!(bucket, ["cat", "kat"]);
        assert_eq!(index.lookup(&encode("dug").unwrap()), ["dog"]);
        assert_eq!(index.bucket_count(), 2);
    }

    #[test]
    fn test_index_lookup_missing_code_is_empty() {
        let index = PhoneticIndex::build(["cat"]).unwrap();
        assert!(index.lookup(&encode("zebra").unwrap()).is_empty());
    }
}
