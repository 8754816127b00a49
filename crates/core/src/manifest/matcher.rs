use crate::error::Result;
use bundlescope_api::{BuildManifest, LoaderRule};
use regex::{Regex, RegexBuilder};
use std::path::Path;

struct CompiledRule<'a> {
    rule: &'a LoaderRule,
    test: Regex,
    exclude: Option<Regex>,
}

/// Compiled view over a rule list, answering which loader chain a file
/// would go through.
pub struct RuleMatcher<'a> {
    rules: Vec<CompiledRule<'a>>,
}

impl<'a> RuleMatcher<'a> {
    pub fn new(rules: &'a [LoaderRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| -> Result<CompiledRule<'a>> {
                let test = RegexBuilder::new(&rule.test)
                    .case_insensitive(rule.case_insensitive)
                    .build()?;
                let exclude = rule.exclude.as_deref().map(Regex::new).transpose()?;
                Ok(CompiledRule {
                    rule,
                    test,
                    exclude,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn for_manifest(manifest: &'a BuildManifest) -> Result<Self> {
        Self::new(&manifest.rules)
    }

    /// First rule whose `test` matches and whose `exclude` does not.
    /// Paths are compared with `/` separators.
    pub fn rule_for(&self, path: &Path) -> Option<&'a LoaderRule> {
        let subject = path.to_string_lossy().replace('\\', "/");
        self.rules
            .iter()
            .find(|compiled| {
                compiled.test.is_match(&subject)
                    && !compiled
                        .exclude
                        .as_ref()
                        .is_some_and(|ex| ex.is_match(&subject))
            })
            .map(|compiled| compiled.rule)
    }
}
