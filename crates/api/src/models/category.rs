use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A logical grouping of source files by role.
///
/// The category name doubles as the directory name under the source root,
/// so `Category::STYLE` is scanned at `<source_root>/style/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Category(#[schemars(with = "String")] Cow<'static, str>);

impl Category {
    pub const JS: Category = Category(Cow::Borrowed("js"));
    pub const STYLE: Category = Category(Cow::Borrowed("style"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Extensions recognized for the built-in categories.
    /// Custom categories have no defaults and must list their own.
    pub fn default_extensions(&self) -> &'static [&'static str] {
        match self.as_str() {
            "js" => &["js"],
            "style" => &["scss", "css"],
            _ => &[],
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Normalize a configured extension: surrounding whitespace and a single
/// leading dot are dropped, so `".scss"` and `"scss"` are the same rule.
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    trimmed.strip_prefix('.').unwrap_or(trimmed).to_string()
}

/// Normalize each extension and drop repeats, keeping first occurrences
/// in order. `["js", ".js"]` collapses to `["js"]`.
pub fn normalize_extensions<S: AsRef<str>>(exts: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for ext in exts {
        let ext = normalize_extension(ext.as_ref());
        if !out.contains(&ext) {
            out.push(ext);
        }
    }
    out
}
