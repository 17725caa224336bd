// src/languages.rs
//! Extension → delimiter table.
//!
//! The table ships embedded in the binary and can be replaced wholesale
//! with `--languages`. Entries are `(single, multi-start, multi-end)`
//! triples; `null` marks an absent symbol. Extensions listed under
//! `ignore` are never scanned during directory walks.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use count_loc_core::DelimiterSpec;
use serde::Deserialize;

const EMBEDDED_TABLE: &str = include_str!("../assets/languages.json");

#[derive(Debug, Deserialize)]
struct RawTable {
    #[serde(default)]
    ignore: Vec<String>,
    comments: BTreeMap<String, Vec<Option<String>>>,
}

#[derive(Debug, Clone)]
pub struct LanguageTable {
    ignored: HashSet<String>,
    specs: HashMap<String, DelimiterSpec>,
}

impl LanguageTable {
    /// The table compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_TABLE).context("embedded language table is malformed")
    }

    /// A user-supplied replacement table.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read language table {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("invalid language table {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(text)?;
        let mut specs = HashMap::with_capacity(raw.comments.len());
        for (ext, symbols) in raw.comments {
            let [single, start, end]: [Option<String>; 3] =
                symbols.try_into().map_err(|got: Vec<_>| {
                    anyhow!(
                        "comment data for extension '{ext}' must be a \
                         (single, multi-start, multi-end) triple, got {} entries",
                        got.len()
                    )
                })?;
            let spec = DelimiterSpec::new(
                single.map(String::into_bytes),
                start.map(String::into_bytes),
                end.map(String::into_bytes),
            )
            .with_context(|| format!("comment data for extension '{ext}'"))?;
            specs.insert(ext.to_lowercase(), spec);
        }
        let ignored = raw.ignore.into_iter().map(|ext| ext.to_lowercase()).collect();
        Ok(Self { ignored, specs })
    }

    pub fn resolve(&self, ext: &str) -> Option<&DelimiterSpec> {
        self.specs.get(&ext.to_lowercase())
    }

    pub fn is_ignored(&self, ext: &str) -> bool {
        self.ignored.contains(&ext.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_loads() {
        let table = LanguageTable::embedded().unwrap();
        let c = table.resolve("c").unwrap();
        assert_eq!(c.single_line(), Some(b"//".as_slice()));
        assert_eq!(c.multiline_start(), Some(b"/*".as_slice()));
        let py = table.resolve("py").unwrap();
        assert_eq!(py.single_line(), Some(b"#".as_slice()));
        assert!(py.multiline_start().is_none());
        assert!(table.is_ignored("json"));
        assert!(!table.is_ignored("rs"));
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let table = LanguageTable::embedded().unwrap();
        assert!(table.resolve("RS").is_some());
        assert!(table.is_ignored("JSON"));
    }

    #[test]
    fn rejects_non_triple_entries() {
        let err = LanguageTable::parse(r##"{"comments": {"x": ["#", null]}}"##).unwrap_err();
        assert!(err.to_string().contains("triple"));
    }

    #[test]
    fn rejects_unpaired_multiline_entry() {
        let result = LanguageTable::parse(r#"{"comments": {"x": [null, "/*", null]}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_extension_resolves_to_none() {
        let table = LanguageTable::embedded().unwrap();
        assert!(table.resolve("definitely-not-a-language").is_none());
    }
}
