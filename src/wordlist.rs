use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a word-per-line dictionary file. Blank lines and `#` comments are
/// skipped here; per-word validation happens later in `Dictionary::load`.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read wordlist: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_words_skips_blanks_and_comments() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# header comment").unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  dog  ").unwrap();

        let words = read_words(file.path()).unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_read_words_missing_file() {
        let err = read_words(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read wordlist"));
    }
}
