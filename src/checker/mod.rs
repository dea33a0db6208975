mod finding;
mod result;

pub use finding::{Finding, LineHit, Location, LocationStyle, MAX_EXCERPT_CHARS};
pub use result::{ResultSet, Severity, Snapshot, Summary};

use std::path::Path;

use crate::config::Settings;
use crate::error::{GuidelineGuardError, Result};
use crate::rules::default_rule_groups;
use crate::scanner::{SourceFile, TreeWalker};

/// Shared, read-only inputs for one analysis run.
pub struct ScanContext<'a> {
    pub walker: &'a TreeWalker,
    pub settings: &'a Settings,
}

impl<'a> ScanContext<'a> {
    #[must_use]
    pub const fn new(walker: &'a TreeWalker, settings: &'a Settings) -> Self {
        Self { walker, settings }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    /// Walk the tree, reading every file whose name ends with one of
    /// `suffixes`. Unreadable files are skipped.
    pub fn for_each_source<V: FnMut(&SourceFile, &str)>(&self, suffixes: &[&str], mut visit: V) {
        self.walker.walk(|file| {
            if !file.has_suffix(suffixes) {
                return;
            }
            if let Some(content) = file.read() {
                visit(file, &content);
            }
        });
    }
}

/// One named battery of checks.
///
/// Groups are independent: each walks the tree itself and appends its
/// entries to the shared [`ResultSet`]. A group never fails; problems with
/// individual files are recorded or skipped.
pub trait RuleGroup {
    /// Stable identifier used for selection (`react`, `code-style`, ...).
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn title(&self) -> &'static str;

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet);
}

/// Runs rule groups in declaration order.
pub struct Analyzer {
    groups: Vec<Box<dyn RuleGroup>>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer with every built-in rule group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: default_rule_groups(),
        }
    }

    #[must_use]
    pub fn with_groups(groups: Vec<Box<dyn RuleGroup>>) -> Self {
        Self { groups }
    }

    /// Keep only the groups named in `ids`, preserving declaration order.
    ///
    /// # Errors
    /// Returns `UnknownRuleGroup` for an id that names no built-in group.
    pub fn with_only(ids: &[String]) -> Result<Self> {
        let groups = default_rule_groups();
        if let Some(unknown) = ids
            .iter()
            .find(|id| !groups.iter().any(|g| g.id() == id.as_str()))
        {
            return Err(GuidelineGuardError::UnknownRuleGroup(unknown.clone()));
        }
        let groups = groups
            .into_iter()
            .filter(|g| ids.iter().any(|id| id == g.id()))
            .collect();
        Ok(Self { groups })
    }

    pub fn group_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.iter().map(|g| g.id())
    }

    #[must_use]
    pub fn run(&self, ctx: &ScanContext<'_>) -> ResultSet {
        let mut results = ResultSet::new();
        for group in &self.groups {
            log::debug!("Running {} rules", group.title());
            group.run(ctx, &mut results);
        }
        results
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
