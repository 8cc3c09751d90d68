use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::suggest::{DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_MAX_RESULTS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub wordlist: Option<PathBuf>,

    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_max_edit_distance() -> usize {
    DEFAULT_MAX_EDIT_DISTANCE
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: None,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            max_suggestions: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global
    /// config > defaults.
    pub fn load(
        wordlist: Option<PathBuf>,
        max_edit_distance: Option<usize>,
        max_suggestions: Option<usize>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(".spellguard.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        if wordlist.is_some() {
            config.wordlist = wordlist;
        }
        if let Some(bound) = max_edit_distance {
            config.max_edit_distance = bound;
        }
        if let Some(limit) = max_suggestions {
            config.max_suggestions = limit;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.wordlist.is_some() {
            self.wordlist = other.wordlist;
        }
        if other.max_edit_distance != default_max_edit_distance() {
            self.max_edit_distance = other.max_edit_distance;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellguard").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_edit_distance, 2);
        assert_eq!(config.max_suggestions, 5);
        assert!(config.wordlist.is_none());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            wordlist: Some(PathBuf::from("words.txt")),
            max_edit_distance: 1,
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.wordlist, Some(PathBuf::from("words.txt")));
        assert_eq!(merged.max_edit_distance, 1);
        assert_eq!(merged.max_suggestions, 5);
    }

    #[test]
    fn test_parse_config_file() {
        let config: Config =
            toml::from_str("wordlist = \"en.txt\"\nmax_suggestions = 3\n").unwrap();
        assert_eq!(config.wordlist, Some(PathBuf::from("en.txt")));
        assert_eq!(config.max_edit_distance, 2);
        assert_eq!(config.max_suggestions, 3);
    }
}
