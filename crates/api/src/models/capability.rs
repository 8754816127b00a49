use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Bundler capabilities the host resolves to concrete plugins at build time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub enum CapabilityKind {
    /// Pulls styles imported from scripts out into their own files.
    StyleExtraction,
    /// Caps the number of emitted chunks.
    ChunkLimiting,
    SourceMapGeneration,
    /// Drops the empty script bundles left behind by style-only entries.
    EmptyScriptRemoval,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct CapabilityDescriptor {
    pub kind: CapabilityKind,
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl CapabilityDescriptor {
    pub fn new(kind: CapabilityKind) -> Self {
        Self {
            kind,
            parameters: Map::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }
}
