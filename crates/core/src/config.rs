//! Build configuration.
//!
//! A `BundleConfig` is read from `bundlescope.json` (or an explicit path).
//! Every key is optional; missing keys fall back to the layout of a Rails
//! style `app/assets/_dev` tree with `js` and `style` categories.

use crate::error::{BundlescopeError, Result};
use crate::util::{absolutize, resolve_against};
use bundlescope_api::{Category, Mode, OutputSettings, normalize_extension, normalize_extensions};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "bundlescope.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    /// Directory holding one subdirectory per category.
    pub source_root: PathBuf,
    /// Category name to recognized extensions, scanned in this order.
    pub categories: IndexMap<Category, Vec<String>>,
    /// Files whose name starts with this prefix are partials, not entries.
    /// An empty prefix disables exclusion.
    pub exclusion_prefix: String,
    /// Falls back to `NODE_ENV` when unset.
    pub mode: Option<Mode>,
    pub output: OutputSettings,
    pub source_maps: bool,
    pub max_chunks: u32,

    /// Directory relative paths are resolved against.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        let categories = [Category::JS, Category::STYLE]
            .into_iter()
            .map(|category| {
                let exts: Vec<String> = category
                    .default_extensions()
                    .iter()
                    .map(|e| e.to_string())
                    .collect();
                (category, exts)
            })
            .collect();

        Self {
            source_root: PathBuf::from("./app/assets/_dev/"),
            categories,
            exclusion_prefix: "_".to_string(),
            mode: None,
            output: OutputSettings::default(),
            source_maps: false,
            max_chunks: 1,
            base_dir: None,
        }
    }
}

impl BundleConfig {
    /// Read and validate a config file. Relative paths inside it are
    /// resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: BundleConfig = serde_json::from_str(&content)?;
        let path = absolutize(path)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        config.normalize();
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `bundlescope.json` from `dir` if present, otherwise defaults
    /// rooted at `dir`.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            return Self::from_file(&candidate);
        }
        debug!(
            "No {} in {}, using defaults",
            DEFAULT_CONFIG_FILE,
            dir.display()
        );
        let mut config = Self::default();
        config.base_dir = Some(absolutize(dir)?);
        Ok(config)
    }

    /// Explicit path if given, otherwise [`BundleConfig::discover`] in the
    /// current directory. A missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::discover(&std::env::current_dir()?),
        }
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    fn normalize(&mut self) {
        for exts in self.categories.values_mut() {
            *exts = normalize_extensions(exts.iter());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(BundlescopeError::Config(
                "at least one category is required".to_string(),
            ));
        }
        for (category, exts) in &self.categories {
            let name = category.as_str();
            if name.trim().is_empty() {
                return Err(BundlescopeError::Config(
                    "category names must not be empty".to_string(),
                ));
            }
            if name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(BundlescopeError::Config(format!(
                    "category '{}' must be a plain directory name",
                    name
                )));
            }
            if exts.is_empty() {
                return Err(BundlescopeError::Config(format!(
                    "category '{}' has no extensions",
                    name
                )));
            }
            if let Some(bad) = exts.iter().find(|e| normalize_extension(e).is_empty()) {
                return Err(BundlescopeError::Config(format!(
                    "category '{}' has an empty extension ({:?})",
                    name, bad
                )));
            }
        }
        if self.max_chunks == 0 {
            return Err(BundlescopeError::Config(
                "max_chunks must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Configured mode, else whatever `NODE_ENV` says.
    pub fn effective_mode(&self) -> Mode {
        self.mode.unwrap_or_else(Mode::from_env)
    }

    pub fn source_root(&self) -> PathBuf {
        self.resolve(&self.source_root)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output.path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) => resolve_against(base, path),
            None => path.to_path_buf(),
        }
    }
}
