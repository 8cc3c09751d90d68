use thiserror::Error;

/// Errors the engine can report. Absence of a word or of suggestions is a
/// normal result, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellError {
    /// Empty string or non-alphabetic characters. Recovered at the call
    /// boundary by rejecting the single offending item.
    #[error("invalid input: {0:?} is not a non-empty alphabetic word")]
    InvalidInput(String),

    /// Fatal to `Dictionary::load`: the engine cannot operate with zero words.
    #[error("dictionary is empty: at least one valid word is required")]
    EmptyDictionary,
}

pub type Result<T> = std::result::Result<T, SpellError>;

/// Lowercase `word`, rejecting anything that is not a non-empty run of
/// ASCII letters.
pub fn normalize(word: &str) -> Result<String> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(SpellError::InvalidInput(word.to_string()));
    }
    Ok(word.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("DOG").unwrap(), "dog");
        assert_eq!(normalize("Cat").unwrap(), "cat");
    }

    #[test]
    fn test_normalize_rejects_bad_input() {
        assert_eq!(normalize(""), Err(SpellError::InvalidInput(String::new())));
        assert_eq!(normalize("3og"), Err(SpellError::InvalidInput("3og".into())));
        assert_eq!(
            normalize("don't"),
            Err(SpellError::InvalidInput("don't".into()))
        );
    }
}
