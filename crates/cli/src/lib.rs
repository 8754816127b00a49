mod entries;
mod explain;
mod manifest;
mod schema;

use bundlescope_api::Mode;
use bundlescope_core::BundleConfig;
use bundlescope_core::util::absolutize;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "bundlescope",
    version,
    about = "Discover bundler entry points and emit the bundler configuration",
    long_about = "Bundlescope scans category directories (js, style, ...) under a source root, \
                  groups files sharing a base name into named entry points, and emits a \
                  bundler-consumable manifest describing entries, loaders and plugins."
)]
pub struct Cli {
    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the discovered entry table
    #[command(
        long_about = "Walks every configured category directory under the source root and prints \
                            the entry name to file list mapping. Files whose name starts with the \
                            exclusion prefix (default '_') are treated as partials and skipped."
    )]
    Entries {
        /// Config file (defaults to ./bundlescope.json when present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Override the configured source root
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the full bundler manifest as JSON
    Manifest {
        /// Config file (defaults to ./bundlescope.json when present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Override the configured source root
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        /// Override the configured mode and NODE_ENV
        #[arg(long)]
        mode: Option<Mode>,
    },
    /// Show which loader chain handles a file
    Explain {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Config file (defaults to ./bundlescope.json when present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Print the JSON Schema of the config file
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = bundlescope_core::logging::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Entries {
            config,
            root,
            format,
        } => entries::run(config.as_deref(), root, format),
        Commands::Manifest { config, root, mode } => manifest::run(config.as_deref(), root, mode),
        Commands::Explain { file, config } => explain::run(&file, config.as_deref()),
        Commands::Schema => schema::run(),
    }
}

/// Load the config and apply a `--root` override, which is taken relative
/// to the current directory rather than the config file.
pub(crate) fn load_config(
    config: Option<&Path>,
    root: Option<PathBuf>,
) -> bundlescope_core::Result<BundleConfig> {
    let mut config = BundleConfig::load(config)?;
    if let Some(root) = root {
        config.source_root = absolutize(&root)?;
    }
    Ok(config)
}
