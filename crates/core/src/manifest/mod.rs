//! Turns a config plus a discovered entry table into the manifest the
//! bundler consumes.

pub mod matcher;
pub mod rules;

pub use matcher::RuleMatcher;

use crate::config::BundleConfig;
use crate::discovery::EntryDiscoverer;
use crate::error::Result;
use bundlescope_api::{
    BuildManifest, CapabilityDescriptor, CapabilityKind, EntryTable, Mode, OutputSettings,
};
use tracing::debug;

/// Extensions the bundler tries when resolving an extensionless import.
pub const RESOLVE_EXTENSIONS: &[&str] = &[
    ".js", ".scss", ".css", ".jpg", ".png", ".gif", ".woff", ".woff2", ".svg", ".ttf", ".eot",
];

pub struct ManifestBuilder<'a> {
    config: &'a BundleConfig,
    mode: Option<Mode>,
}

impl<'a> ManifestBuilder<'a> {
    pub fn new(config: &'a BundleConfig) -> Self {
        Self { config, mode: None }
    }

    /// Override the configured (or `NODE_ENV`) mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_else(|| self.config.effective_mode())
    }

    /// Run discovery against the config's source root, then build.
    pub fn discover_and_build(&self) -> Result<BuildManifest> {
        let entries = EntryDiscoverer::from_config(self.config).discover()?;
        self.build(entries)
    }

    /// Assemble the manifest around an already discovered table.
    ///
    /// Every rule pattern is compiled once here so a broken custom pattern
    /// fails the build instead of the first lookup.
    pub fn build(&self, entries: EntryTable) -> Result<BuildManifest> {
        self.config.validate()?;
        let mode = self.mode();
        let rules = rules::default_rules(self.config.source_maps);
        RuleMatcher::new(&rules)?;

        let output = OutputSettings {
            path: self.config.output_path(),
            ..self.config.output.clone()
        };

        debug!(
            "Building {} manifest with {} entries",
            mode,
            entries.len()
        );

        Ok(BuildManifest {
            mode,
            devtool: None,
            entry: entries,
            plugins: self.plugins(),
            output,
            rules,
            resolve_extensions: RESOLVE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        })
    }

    fn plugins(&self) -> Vec<CapabilityDescriptor> {
        vec![
            CapabilityDescriptor::new(CapabilityKind::EmptyScriptRemoval),
            CapabilityDescriptor::new(CapabilityKind::ChunkLimiting)
                .with_parameter("maxChunks", self.config.max_chunks),
            // No filename, so maps are inlined
            CapabilityDescriptor::new(CapabilityKind::SourceMapGeneration),
            CapabilityDescriptor::new(CapabilityKind::StyleExtraction),
        ]
    }
}
