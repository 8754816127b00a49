use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Mapping from entry name to the source files that make up that bundle.
///
/// Keys keep first-discovery order. Once built the table is read-only;
/// use [`EntryTableBuilder`] to assemble one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(transparent)]
pub struct EntryTable {
    entries: IndexMap<String, Vec<PathBuf>>,
}

impl EntryTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&[PathBuf]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.entries
            .iter()
            .map(|(name, paths)| (name.as_str(), paths.as_slice()))
    }

    /// Total number of files across all entries.
    pub fn file_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Name of the entry a file was filed under, if any.
    pub fn entry_of(&self, path: &Path) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, paths)| paths.iter().any(|p| p == path))
            .map(|(name, _)| name.as_str())
    }
}

impl<'a> IntoIterator for &'a EntryTable {
    type Item = (&'a String, &'a Vec<PathBuf>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<PathBuf>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Accumulates discovered files into an [`EntryTable`].
#[derive(Debug, Default)]
pub struct EntryTableBuilder {
    entries: IndexMap<String, Vec<PathBuf>>,
}

impl EntryTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the list for `name`, creating the list on first use.
    /// Existing paths are never replaced.
    pub fn push(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> &mut Self {
        self.entries.entry(name.into()).or_default().push(path.into());
        self
    }

    pub fn build(self) -> EntryTable {
        EntryTable {
            entries: self.entries,
        }
    }
}
