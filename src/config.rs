// File: src/config.rs
use crate::core::trie::MAX_SENTENCE_LEN;
use crate::core::types::{Symbol, Weight};
use crate::error::{AutocompleteError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "AUTOCOMPLETE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default = "default_max_sentence_len")]
    pub max_sentence_len: usize,
    /// How many hot sentences each keystroke returns.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_terminator")]
    pub terminator: char,
    /// Weight added to a sentence each time it is completed by typing.
    #[serde(default = "default_commit_increment")]
    pub commit_increment: Weight,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            max_sentence_len: default_max_sentence_len(),
            top_k: default_top_k(),
            terminator: default_terminator(),
            commit_increment: default_commit_increment(),
        }
    }
}

impl AutocompleteConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let parsed: AutocompleteConfig = serde_json::from_str(raw)?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Loads the file named by `AUTOCOMPLETE_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_sentence_len == 0 || self.max_sentence_len > MAX_SENTENCE_LEN {
            return Err(AutocompleteError::Config(format!(
                "max_sentence_len must be between 1 and {}",
                MAX_SENTENCE_LEN
            )));
        }
        if self.top_k == 0 {
            return Err(AutocompleteError::Config("top_k must be at least 1".into()));
        }
        if self.commit_increment == 0 {
            return Err(AutocompleteError::Config("commit_increment must be positive".into()));
        }
        if Symbol::try_from(self.terminator).is_ok() {
            return Err(AutocompleteError::Config(format!(
                "terminator {:?} collides with the sentence alphabet",
                self.terminator
            )));
        }
        Ok(())
    }
}

fn default_max_sentence_len() -> usize {
    MAX_SENTENCE_LEN
}

fn default_top_k() -> usize {
    3
}

fn default_terminator() -> char {
    '#'
}

fn default_commit_increment() -> Weight {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_yields_defaults() {
        let config = AutocompleteConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AutocompleteConfig::default());
        assert_eq!(config.max_sentence_len, 200);
        assert_eq!(config.top_k, 3);
        assert_eq!(config.terminator, '#');
        assert_eq!(config.commit_increment, 1);
    }

    #[test]
    fn partial_override() {
        let config = AutocompleteConfig::from_json_str(r#"{"top_k": 5, "terminator": "."}"#).unwrap();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.terminator, '.');
        assert_eq!(config.max_sentence_len, 200);
    }

    #[test]
    fn rejects_unusable_values() {
        for raw in [
            r#"{"top_k": 0}"#,
            r#"{"max_sentence_len": 0}"#,
            r#"{"max_sentence_len": 201}"#,
            r#"{"max_sentence_len": 200000}"#,
            r#"{"commit_increment": 0}"#,
            r#"{"terminator": "a"}"#,
            r#"{"terminator": " "}"#,
        ] {
            let err = AutocompleteConfig::from_json_str(raw).unwrap_err();
            assert_eq!(err.code(), "INVALID_CONFIG", "{raw}");
        }
        let longest = AutocompleteConfig::from_json_str(r#"{"max_sentence_len": 200}"#).unwrap();
        assert_eq!(longest.max_sentence_len, MAX_SENTENCE_LEN);
        let err = AutocompleteConfig::from_json_str("{not json").unwrap_err();
        assert_eq!(err.code(), "JSON_ERROR");
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_sentence_len": 16}}"#).unwrap();
        let config = AutocompleteConfig::load(file.path()).unwrap();
        assert_eq!(config.max_sentence_len, 16);

        let missing = AutocompleteConfig::load(Path::new("/nonexistent/autocomplete.json"));
        assert_eq!(missing.unwrap_err().code(), "IO_ERROR");
    }
}
