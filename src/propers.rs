// 🔗 Propers Index - Display name to supplementary metadata
// JSON object: { "<observance name>": { "url": "https://..." } }

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProperEntry {
    /// Link to the propers of the Mass
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropersIndex {
    entries: HashMap<String, ProperEntry>,
}

impl PropersIndex {
    /// Load an index from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read propers file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse propers JSON")
    }

    pub fn lookup(&self, name: &str) -> Option<&ProperEntry> {
        self.entries.get(name)
    }

    /// URL of an observance's propers, if the index has one
    pub fn url(&self, name: &str) -> Option<&str> {
        self.lookup(name)?.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Builder: add one entry
    pub fn with_entry(mut self, name: &str, url: &str) -> Self {
        self.entries.insert(
            name.to_string(),
            ProperEntry {
                url: Some(url.to_string()),
            },
        );
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "Easter Sunday": { "url": "https://uvoc.org/easter" },
        "Good Friday": { "url": "" },
        "Saint Joseph, Spouse of the Blessed Virgin Mary": {}
    }"#;

    #[test]
    fn test_lookup_and_url() {
        let index = PropersIndex::from_json(SAMPLE).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.url("Easter Sunday"), Some("https://uvoc.org/easter"));
        assert!(index.lookup("Saint Joseph, Spouse of the Blessed Virgin Mary").is_some());
        assert_eq!(index.url("Saint Joseph, Spouse of the Blessed Virgin Mary"), None);
        assert_eq!(index.url("Good Friday"), None);
        assert_eq!(index.url("Unknown"), None);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let index = PropersIndex::from_file(file.path()).unwrap();
        assert_eq!(index.url("Easter Sunday"), Some("https://uvoc.org/easter"));
    }

    #[test]
    fn test_malformed_json_fails_with_context() {
        let err = PropersIndex::from_json("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("Failed to parse propers JSON"));
    }
}
