use crate::load_config;
use bundlescope_api::{EntryTable, LoaderRule};
use bundlescope_core::manifest::rules::default_rules;
use bundlescope_core::util::absolutize;
use bundlescope_core::{EntryDiscoverer, RuleMatcher};
use std::fmt::Write;
use std::path::Path;

pub fn run(file: &Path, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config, None)?;
    let rules = default_rules(config.source_maps);
    let matcher = RuleMatcher::new(&rules)?;
    let entries = EntryDiscoverer::from_config(&config).discover()?;

    let file = absolutize(file)?;
    print!("{}", describe(&file, matcher.rule_for(&file), &entries));
    Ok(())
}

pub(crate) fn describe(file: &Path, rule: Option<&LoaderRule>, entries: &EntryTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File:  {}", file.display());
    match entries.entry_of(file) {
        Some(name) => {
            let _ = writeln!(out, "Entry: {}", name);
        }
        None => {
            let _ = writeln!(out, "Entry: - (not an entry point)");
        }
    }

    let Some(rule) = rule else {
        let _ = writeln!(out, "Rule:  - (no loader rule matches)");
        return out;
    };

    let _ = writeln!(out, "Rule:  {} ({})", rule.name, rule.test);
    // Bundlers apply the chain from the last loader to the first
    for (step, loader) in rule.uses.iter().rev().enumerate() {
        if loader.options.is_empty() {
            let _ = writeln!(out, "  {}. {}", step + 1, loader.loader);
        } else {
            let options = serde_json::Value::Object(loader.options.clone());
            let _ = writeln!(out, "  {}. {} {}", step + 1, loader.loader, options);
        }
    }
    out
}
