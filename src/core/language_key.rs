use std::{collections::HashMap, fs, path::Path};

use tracing::debug;

use super::error::{Error, Result};
use crate::utils::code_key;

/// Lookup from exact ACS language code to its display label.
///
/// Keys are stored the way survey codes print as floats: `"<id>.0"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageKey {
    labels: HashMap<String, String>,
}

impl LanguageKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `id,label` lines. Blank lines are skipped.
    pub fn parse(source: &str) -> Result<Self> {
        let mut labels = HashMap::new();

        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            let [id, label] = fields.as_slice() else {
                return Err(Error::MalformedTableLine {
                    line: index + 1,
                    expected: 2,
                    found: fields.len(),
                    content: line.to_string(),
                });
            };

            labels.insert(format!("{}.0", id), label.to_string());
        }

        Ok(Self { labels })
    }

    pub fn insert(&mut self, id: &str, label: impl Into<String>) {
        self.labels.insert(format!("{}.0", id), label.into());
    }

    /// Exact lookup by stored key, e.g. `"1200.0"`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Lookup by numeric code, formatted the same way the keys are stored.
    pub fn label_for(&self, code: f64) -> Option<&str> {
        self.lookup(&code_key(code))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Read a language key table from disk.
pub fn import_language_key(path: &Path) -> Result<LanguageKey> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let key = LanguageKey::parse(&content)?;
    debug!(path = %path.display(), labels = key.len(), "imported language key");
    Ok(key)
}
