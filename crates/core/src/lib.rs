pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod util;

pub use config::BundleConfig;
pub use discovery::EntryDiscoverer;
pub use error::Result;
pub use manifest::{ManifestBuilder, RuleMatcher};
