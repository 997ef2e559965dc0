//! Glossary entries and the case-insensitive term table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A domain term and its definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// Lowercased term, the lookup key.
    pub key: String,
    /// Term as authored, the text the annotator searches for.
    pub term: String,
    pub definition: String,
}

impl GlossaryEntry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            key: term.to_lowercase(),
            term,
            definition: definition.into(),
        }
    }
}

/// Glossary keyed by lowercased term, in insertion order.
///
/// Inserting a term whose key already exists replaces the earlier entry but
/// keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<GlossaryEntry>", into = "Vec<GlossaryEntry>")]
pub struct Glossary {
    entries: IndexMap<String, GlossaryEntry>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: GlossaryEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Look up a term, ignoring case.
    pub fn get(&self, term: &str) -> Option<&GlossaryEntry> {
        self.entries.get(&term.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlossaryEntry> {
        self.entries.values()
    }
}

impl FromIterator<GlossaryEntry> for Glossary {
    fn from_iter<I: IntoIterator<Item = GlossaryEntry>>(iter: I) -> Self {
        let mut glossary = Self::new();
        for entry in iter {
            glossary.insert(entry);
        }
        glossary
    }
}

impl From<Vec<GlossaryEntry>> for Glossary {
    fn from(entries: Vec<GlossaryEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Glossary> for Vec<GlossaryEntry> {
    fn from(glossary: Glossary) -> Self {
        glossary.entries.into_values().collect()
    }
}
