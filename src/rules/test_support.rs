use std::path::Path;

use tempfile::TempDir;

use crate::checker::{ResultSet, RuleGroup, ScanContext};
use crate::config::Settings;
use crate::scanner::{IgnoreFilter, TreeWalker};

/// Temporary project tree for driving a single rule group.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn file(self, relative: &str, content: &str) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn run(&self, group: &dyn RuleGroup) -> ResultSet {
        self.run_with(group, &Settings::default())
    }

    pub fn run_with(&self, group: &dyn RuleGroup, settings: &Settings) -> ResultSet {
        let walker = TreeWalker::new(self.path(), IgnoreFilter::load(self.path(), &[]));
        let mut results = ResultSet::new();
        group.run(&ScanContext::new(&walker, settings), &mut results);
        results
    }
}

/// First entry across all buckets whose first line contains `needle`.
pub fn entry<'a>(entries: &'a [String], needle: &str) -> Option<&'a String> {
    entries
        .iter()
        .find(|e| e.lines().next().is_some_and(|l| l.contains(needle)))
}
