use crate::{OutputFormat, load_config};
use bundlescope_api::EntryTable;
use bundlescope_core::EntryDiscoverer;
use std::path::{Path, PathBuf};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "File")]
    file: String,
}

pub fn run(
    config: Option<&Path>,
    root: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config, root)?;
    let discoverer = EntryDiscoverer::from_config(&config);
    info!("Discovering entries under {}", discoverer.root().display());

    let table = discoverer.discover()?;
    println!("{}", render(&table, format)?);
    Ok(())
}

pub(crate) fn render(table: &EntryTable, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(table),
        OutputFormat::Table => {
            let rows: Vec<EntryRow> = table
                .iter()
                .flat_map(|(name, paths)| {
                    paths.iter().map(move |path| EntryRow {
                        entry: name.to_string(),
                        file: path.display().to_string(),
                    })
                })
                .collect();
            Ok(Table::new(rows).with(Style::psql()).to_string())
        }
    }
}
