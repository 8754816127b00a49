pub mod scanner;

pub use scanner::EntryDiscoverer;

use std::path::Path;

/// Glob-style visibility: names starting with `.` are neither matched nor
/// descended into.
pub fn is_relevant_path(path: &Path) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => !name.starts_with('.'),
        None => true,
    }
}

/// True when the file's base name marks it as a partial.
pub fn is_excluded(path: &Path, exclusion_prefix: &str) -> bool {
    if exclusion_prefix.is_empty() {
        return false;
    }
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.starts_with(exclusion_prefix))
}

/// Entry name for a file given its path relative to the category root,
/// or `None` if it does not carry `.extension`.
///
/// `pages/top.js` with extension `js` gives `pages/top`.
pub fn entry_name(relative: &str, extension: &str) -> Option<String> {
    let stem = relative.strip_suffix(extension)?.strip_suffix('.')?;
    // A bare `.js` under a directory has no name to give the entry
    if stem.is_empty() || stem.ends_with('/') {
        return None;
    }
    Some(stem.to_string())
}
