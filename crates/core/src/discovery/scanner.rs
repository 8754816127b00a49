use super::{entry_name, is_excluded, is_relevant_path};
use crate::config::BundleConfig;
use crate::error::Result;
use crate::util::{absolutize, to_slash};
use bundlescope_api::{Category, EntryTable, EntryTableBuilder, normalize_extensions};
use ignore::WalkBuilder;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Builds an [`EntryTable`] by scanning `<root>/<category>/**/*.<ext>`.
#[derive(Debug, Clone)]
pub struct EntryDiscoverer {
    root: PathBuf,
    categories: IndexMap<Category, Vec<String>>,
    exclusion_prefix: String,
}

impl EntryDiscoverer {
    /// A discoverer with no categories and the default `_` exclusion prefix.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            categories: IndexMap::new(),
            exclusion_prefix: "_".to_string(),
        }
    }

    pub fn from_config(config: &BundleConfig) -> Self {
        Self {
            root: config.source_root(),
            categories: config
                .categories
                .iter()
                .map(|(category, exts)| (category.clone(), normalize_extensions(exts)))
                .collect(),
            exclusion_prefix: config.exclusion_prefix.clone(),
        }
    }

    /// Add a category, or extend an existing one with more extensions.
    /// Extensions already registered for the category are not added twice.
    pub fn with_category<S: AsRef<str>>(
        mut self,
        category: impl Into<Category>,
        extensions: impl IntoIterator<Item = S>,
    ) -> Self {
        let exts = self.categories.entry(category.into()).or_default();
        for ext in normalize_extensions(extensions) {
            if !exts.contains(&ext) {
                exts.push(ext);
            }
        }
        self
    }

    pub fn with_exclusion_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.exclusion_prefix = prefix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan every category and collect the entry table.
    ///
    /// Missing directories and unreadable subtrees contribute nothing.
    /// The only error is failing to make the root absolute.
    pub fn discover(&self) -> Result<EntryTable> {
        let start = Instant::now();
        let root = absolutize(&self.root)?;
        let mut builder = EntryTableBuilder::new();

        if !root.is_dir() {
            warn!(
                "Source root {} does not exist, no entries discovered",
                root.display()
            );
            return Ok(builder.build());
        }

        let mut matched_files = 0usize;
        for (category, extensions) in &self.categories {
            let category_root = root.join(category.as_str());
            if !category_root.is_dir() {
                debug!(
                    "Skipping category {}: {} not found",
                    category,
                    category_root.display()
                );
                continue;
            }

            let paths = Self::collect_paths(&category_root);
            for extension in extensions {
                let mut matched = 0usize;
                for path in &paths {
                    if is_excluded(path, &self.exclusion_prefix) {
                        continue;
                    }
                    let Some(relative) = path
                        .strip_prefix(&category_root)
                        .ok()
                        .and_then(to_slash)
                    else {
                        continue;
                    };
                    if let Some(name) = entry_name(&relative, extension) {
                        builder.push(name, path.clone());
                        matched += 1;
                    }
                }
                debug!("Category {} (.{}): {} files", category, extension, matched);
                matched_files += matched;
            }
        }

        let table = builder.build();
        info!(
            "Discovered {} entries from {} files under {} in {:?}",
            table.len(),
            matched_files,
            root.display(),
            start.elapsed()
        );
        Ok(table)
    }

    /// Files under `dir`, sorted, skipping hidden names at any depth.
    pub(crate) fn collect_paths(dir: &Path) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkBuilder::new(dir)
            .standard_filters(false)
            .hidden(true)
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && is_relevant_path(path) {
                        return Some(path.to_path_buf());
                    }
                    None
                }
                Err(e) => {
                    warn!("Skipping unreadable path under {}: {}", dir.display(), e);
                    None
                }
            })
            .collect();
        paths.sort();
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // Default temp dir names start with `.`; keep the walk root visible
    fn tempdir() -> tempfile::TempDir {
        tempfile::Builder::new()
            .prefix("bundlescope")
            .tempdir()
            .unwrap()
    }

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn test_collect_paths_skips_hidden_and_sorts() {
        let dir = tempdir();
        touch(dir.path(), "b.js");
        touch(dir.path(), "a.js");
        touch(dir.path(), ".hidden.js");
        touch(dir.path(), ".cache/c.js");
        touch(dir.path(), "nested/d.js");

        let paths = EntryDiscoverer::collect_paths(dir.path());
        let rel: Vec<_> = paths
            .iter()
            .map(|p| to_slash(p.strip_prefix(dir.path()).unwrap()).unwrap())
            .collect();
        assert_eq!(rel, vec!["a.js", "b.js", "nested/d.js"]);
    }

    #[test]
    fn test_with_category_merges_extensions() {
        let discoverer = EntryDiscoverer::new("/src")
            .with_category("style", [".scss"])
            .with_category("style", ["css", "scss"]);
        assert_eq!(discoverer.categories[&Category::STYLE], vec!["scss", "css"]);
    }

    #[test]
    fn test_extension_order_drives_list_order() {
        let dir = tempdir();
        let css = touch(dir.path(), "style/theme.css");
        let scss = touch(dir.path(), "style/theme.scss");

        let table = EntryDiscoverer::new(dir.path())
            .with_category("style", ["scss", "css"])
            .discover()
            .unwrap();
        assert_eq!(table.get("theme").unwrap(), &[scss, css]);
    }
}
