//! Thesis collection module
//!
//! Holds the read-only, per-language thesis sequences served by the site.
//! The collection is loaded once at startup, either from the built-in
//! `data/theses.toml` or from a file named in the configuration, and is
//! shared by reference between all requests afterwards.

mod error;

pub use error::DatasetError;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Built-in collection compiled into the binary
const BUILTIN_THESES: &str = include_str!("../../data/theses.toml");

/// On-disk shape of a thesis file
#[derive(Debug, Deserialize)]
struct ThesisFile {
    #[serde(default)]
    default_language: Option<String>,
    theses: BTreeMap<String, Vec<String>>,
}

/// Immutable thesis collection keyed by two-letter language code
#[derive(Debug, Clone)]
pub struct Theses {
    collections: BTreeMap<String, Vec<String>>,
    default_language: String,
}

impl Theses {
    /// Load the collection compiled into the binary
    ///
    /// `fallback_default` is used only when the file itself does not name a
    /// default language.
    pub fn builtin(fallback_default: &str) -> Result<Self, DatasetError> {
        Self::from_toml_str(BUILTIN_THESES, fallback_default)
    }

    /// Load a collection from a TOML file on disk
    pub fn from_file(path: &Path, fallback_default: &str) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, fallback_default)
    }

    /// Parse a collection from TOML text
    pub fn from_toml_str(content: &str, fallback_default: &str) -> Result<Self, DatasetError> {
        let file: ThesisFile = toml::from_str(content)?;
        let default_language = file
            .default_language
            .unwrap_or_else(|| fallback_default.to_string());
        Self::new(file.theses, default_language)
    }

    /// Build a validated collection from in-memory sequences
    pub fn new(
        collections: BTreeMap<String, Vec<String>>,
        default_language: String,
    ) -> Result<Self, DatasetError> {
        if collections.is_empty() {
            return Err(DatasetError::Empty);
        }

        if let Some(code) = collections.keys().find(|code| !is_language_code(code)) {
            return Err(DatasetError::InvalidLanguageCode(code.clone()));
        }

        match collections.get(&default_language) {
            None => return Err(DatasetError::MissingDefault(default_language)),
            Some(seq) if seq.is_empty() => return Err(DatasetError::EmptyDefault(default_language)),
            Some(_) => {}
        }

        Ok(Self {
            collections,
            default_language,
        })
    }

    /// Language used when negotiation finds no supported preference
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// All language codes present in the collection, in sorted order
    pub fn supported_languages(&self) -> Vec<&str> {
        self.collections.keys().map(String::as_str).collect()
    }

    /// Ordered sequence for a language; empty for unknown languages
    pub fn sequence(&self, language: &str) -> &[String] {
        self.collections.get(language).map_or(&[][..], Vec::as_slice)
    }

    /// Number of theses in the default language
    pub fn default_len(&self) -> usize {
        self.sequence(&self.default_language).len()
    }

    /// Fetch thesis `n` (1-indexed) in `language`
    pub fn get(&self, language: &str, n: usize) -> Option<&str> {
        let index = n.checked_sub(1)?;
        self.sequence(language).get(index).map(String::as_str)
    }
}

fn is_language_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn seq(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_builtin_collection_loads() {
        let theses = Theses::builtin("en").unwrap();
        assert_eq!(theses.default_language(), "en");
        assert_eq!(theses.supported_languages(), vec!["de", "en"]);
        assert!(theses.default_len() > 0);
        assert_eq!(theses.get("en", 1), Some("Markets are conversations."));
        assert_eq!(theses.sequence("en").len(), theses.sequence("de").len());
    }

    #[test]
    fn test_get_is_one_indexed() {
        let theses = Theses::new(
            BTreeMap::from([("en".to_string(), seq(&["a", "b", "c"]))]),
            "en".to_string(),
        )
        .unwrap();
        assert_eq!(theses.get("en", 0), None);
        assert_eq!(theses.get("en", 1), Some("a"));
        assert_eq!(theses.get("en", 3), Some("c"));
        assert_eq!(theses.get("en", 4), None);
        assert_eq!(theses.get("fr", 1), None);
        assert!(theses.sequence("fr").is_empty());
    }

    #[test]
    fn test_empty_collection_rejected() {
        let err = Theses::new(BTreeMap::new(), "en".to_string()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_missing_default_rejected() {
        let err = Theses::new(
            BTreeMap::from([("de".to_string(), seq(&["x"]))]),
            "en".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::MissingDefault(ref code) if code == "en"));
    }

    #[test]
    fn test_empty_default_rejected() {
        let err = Theses::new(
            BTreeMap::from([("en".to_string(), seq(&[])), ("de".to_string(), seq(&["x"]))]),
            "en".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::EmptyDefault(_)));
    }

    #[test]
    fn test_invalid_language_code_rejected() {
        let err = Theses::new(
            BTreeMap::from([
                ("en".to_string(), seq(&["x"])),
                ("en-GB".to_string(), seq(&["y"])),
            ]),
            "en".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::InvalidLanguageCode(ref code) if code == "en-GB"));
    }

    #[test]
    fn test_file_default_overrides_fallback() {
        let content = r#"
            default_language = "de"

            [theses]
            en = ["one"]
            de = ["eins", "zwei"]
        "#;
        let theses = Theses::from_toml_str(content, "en").unwrap();
        assert_eq!(theses.default_language(), "de");
        assert_eq!(theses.default_len(), 2);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[theses]\nen = [\"first\", \"second\"]").unwrap();

        let theses = Theses::from_file(file.path(), "en").unwrap();
        assert_eq!(theses.get("en", 2), Some("second"));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theses::from_file(&dir.path().join("absent.toml"), "en").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = Theses::from_toml_str("theses = 3", "en").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }
}
