mod common;

use bundlescope_core::{BundleConfig, EntryDiscoverer};
use common::fixture;
use std::path::PathBuf;
use walkdir::WalkDir;

fn default_discoverer(root: impl Into<PathBuf>) -> EntryDiscoverer {
    EntryDiscoverer::new(root)
        .with_category("js", ["js"])
        .with_category("style", ["scss", "css"])
}

#[test]
fn test_script_and_style_share_entry() {
    let dir = fixture(&["js/foo.js", "style/foo.scss"]);
    let table = default_discoverer(dir.path()).discover().unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(
        table.get("foo").unwrap(),
        &[dir.path().join("js/foo.js"), dir.path().join("style/foo.scss")]
    );
}

#[test]
fn test_partials_are_excluded() {
    let dir = fixture(&["js/_partial.js", "js/app.js", "style/_mixins.scss"]);
    let table = default_discoverer(dir.path()).discover().unwrap();

    assert!(!table.contains("_partial"));
    assert!(!table.contains("_mixins"));
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["app"]);
}

#[test]
fn test_partial_prefix_only_applies_to_file_name() {
    let dir = fixture(&["js/_shared/widget.js"]);
    let table = default_discoverer(dir.path()).discover().unwrap();
    assert!(table.contains("_shared/widget"));
}

#[test]
fn test_missing_category_contributes_nothing() {
    let dir = fixture(&["js/app.js"]);
    let table = default_discoverer(dir.path()).discover().unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.get("app").unwrap().iter().all(|p| p.starts_with(dir.path().join("js"))));
}

#[test]
fn test_missing_root_yields_empty_table() {
    let dir = fixture(&[]);
    let table = default_discoverer(dir.path().join("does-not-exist"))
        .discover()
        .unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_nested_entries_use_slash_names() {
    let dir = fixture(&["js/pages/top/index.js", "style/pages/top/index.css"]);
    let table = default_discoverer(dir.path()).discover().unwrap();
    assert_eq!(table.get("pages/top/index").unwrap().len(), 2);
}

#[test]
fn test_unrecognized_and_hidden_files_ignored() {
    let dir = fixture(&[
        "js/readme.md",
        "js/.eslintrc.js",
        "js/.cache/app.js",
        "style/theme.sass",
        "images/logo.png",
    ]);
    let table = default_discoverer(dir.path()).discover().unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_empty_prefix_disables_exclusion() {
    let dir = fixture(&["js/_partial.js"]);
    let table = default_discoverer(dir.path())
        .with_exclusion_prefix("")
        .discover()
        .unwrap();
    assert!(table.contains("_partial"));
}

#[test]
fn test_root_is_normalized_lexically() {
    let dir = fixture(&["js/app.js"]);
    let table = default_discoverer(dir.path().join("missing/./.."))
        .discover()
        .unwrap();
    assert_eq!(table.get("app").unwrap(), &[dir.path().join("js/app.js")]);
}

#[test]
fn test_every_matching_file_is_filed_once() {
    let dir = fixture(&[
        "js/app.js",
        "js/admin/dashboard.js",
        "js/admin/_helpers.js",
        "js/vendor.min.js",
        "style/app.scss",
        "style/print.css",
        "style/admin/dashboard.scss",
        "style/admin/_variables.scss",
        "style/notes.txt",
    ]);
    let table = default_discoverer(dir.path()).discover().unwrap();

    let mut expected = 0;
    for entry in WalkDir::new(dir.path()).into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        let name = path.file_name().unwrap().to_str().unwrap();
        let recognized = ["js", "scss", "css"]
            .iter()
            .any(|ext| name.ends_with(&format!(".{}", ext)));
        let listed = table.entry_of(path);

        if !recognized || name.starts_with('_') {
            assert_eq!(listed, None, "{} should not be listed", path.display());
            continue;
        }
        expected += 1;
        let category_root = if path.starts_with(dir.path().join("js")) {
            dir.path().join("js")
        } else {
            dir.path().join("style")
        };
        let rel = path.strip_prefix(&category_root).unwrap().to_str().unwrap();
        let stem = &rel[..rel.rfind('.').unwrap()];
        assert_eq!(listed, Some(stem), "{} filed under wrong entry", path.display());
    }

    assert_eq!(table.file_count(), expected);
    assert!(table.contains("vendor.min"));
    assert_eq!(table.get("admin/dashboard").unwrap().len(), 2);
}

#[test]
fn test_discovery_is_idempotent() {
    let dir = fixture(&["js/a.js", "js/b/c.js", "style/a.scss", "style/b/c.css"]);
    let discoverer = default_discoverer(dir.path());
    let first = discoverer.discover().unwrap();
    let second = discoverer.discover().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_config_driven_discovery() {
    let dir = fixture(&["app/assets/_dev/js/app.js", "app/assets/_dev/style/app.scss"]);
    let config = BundleConfig::discover(dir.path()).unwrap();
    let table = EntryDiscoverer::from_config(&config).discover().unwrap();

    assert_eq!(table.get("app").unwrap().len(), 2);
}

#[test]
fn test_custom_categories_from_config_file() {
    let dir = fixture(&["src/scripts/main.ts", "src/scripts/legacy.ts", "src/css/main.css"]);
    std::fs::write(
        dir.path().join("bundlescope.json"),
        r#"{
            "source_root": "src",
            "categories": { "scripts": ["ts"], "css": ["css"] },
            "exclusion_prefix": "legacy"
        }"#,
    )
    .unwrap();

    let config = BundleConfig::discover(dir.path()).unwrap();
    let table = EntryDiscoverer::from_config(&config).discover().unwrap();
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["main"]);
    assert_eq!(table.get("main").unwrap().len(), 2);
}

#[test]
fn test_repeated_extension_lists_file_once() {
    let dir = fixture(&["src/js/foo.js"]);
    std::fs::write(
        dir.path().join("bundlescope.json"),
        r#"{ "source_root": "src", "categories": { "js": ["js", ".js"] } }"#,
    )
    .unwrap();

    let config = BundleConfig::discover(dir.path()).unwrap();
    let table = EntryDiscoverer::from_config(&config).discover().unwrap();
    assert_eq!(table.get("foo").unwrap(), &[dir.path().join("src/js/foo.js")]);
    assert_eq!(table.file_count(), 1);
}

#[test]
fn test_repeated_extension_via_builder_lists_file_once() {
    let dir = fixture(&["js/foo.js"]);
    let table = EntryDiscoverer::new(dir.path())
        .with_category("js", ["js", ".js"])
        .with_category("js", ["js"])
        .discover()
        .unwrap();
    assert_eq!(table.get("foo").unwrap().len(), 1);
}
