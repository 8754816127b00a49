use super::capability::{CapabilityDescriptor, CapabilityKind};
use super::entry::EntryTable;
use super::mode::Mode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory bundled files are written to.
    pub path: PathBuf,
    /// File name template, `[name]` is replaced by the entry name.
    pub filename: String,
    pub source_map_filename: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("app/assets/builds"),
            filename: "[name].js".to_string(),
            source_map_filename: "[name].js.map".to_string(),
        }
    }
}

/// One loader in a rule's chain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct LoaderUse {
    pub loader: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl LoaderUse {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Map::new(),
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Map<String, Value>) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}

/// Routes files whose path matches `test` (and not `exclude`) through `uses`.
///
/// Loaders are listed in bundler order: the last one runs first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct LoaderRule {
    pub name: String,
    pub test: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    #[serde(default)]
    pub case_insensitive: bool,
    pub uses: Vec<LoaderUse>,
}

/// Complete bundler-consumable description of a build.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct BuildManifest {
    pub mode: Mode,
    /// `None` disables the bundler's own devtool; source maps come from
    /// the `SourceMapGeneration` capability instead.
    pub devtool: Option<String>,
    pub entry: EntryTable,
    pub output: OutputSettings,
    pub plugins: Vec<CapabilityDescriptor>,
    pub rules: Vec<LoaderRule>,
    pub resolve_extensions: Vec<String>,
}

impl BuildManifest {
    pub fn plugin(&self, kind: CapabilityKind) -> Option<&CapabilityDescriptor> {
        self.plugins.iter().find(|p| p.kind == kind)
    }

    pub fn rule(&self, name: &str) -> Option<&LoaderRule> {
        self.rules.iter().find(|r| r.name == name)
    }
}
