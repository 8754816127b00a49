use crate::load_config;
use bundlescope_api::Mode;
use bundlescope_core::ManifestBuilder;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(
    config: Option<&Path>,
    root: Option<PathBuf>,
    mode: Option<Mode>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config, root)?;

    let mut builder = ManifestBuilder::new(&config);
    if let Some(mode) = mode {
        builder = builder.with_mode(mode);
    }
    let manifest = builder.discover_and_build()?;

    info!(
        "Manifest ready: {} entries, {} rules, {} plugins ({})",
        manifest.entry.len(),
        manifest.rules.len(),
        manifest.plugins.len(),
        manifest.mode
    );
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
