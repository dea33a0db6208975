use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{FileFilter, IgnoreFilter, SourceFile};

/// Depth-first walk over the non-ignored regular files under a root.
///
/// Ignored directories are pruned rather than filtered after the fact, and
/// entries are visited in file-name order so two walks of an unchanged tree
/// see the same sequence. Entries that cannot be read (permission errors,
/// races with deletion, symlink loops) are skipped.
#[derive(Debug, Clone)]
pub struct TreeWalker<F: FileFilter = IgnoreFilter> {
    root: PathBuf,
    filter: F,
}

impl<F: FileFilter> TreeWalker<F> {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, filter: F) -> Self {
        Self {
            root: root.into(),
            filter,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Call `visit` once for every non-ignored regular file.
    pub fn walk<V: FnMut(&SourceFile)>(&self, mut visit: V) {
        let entries = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_ignored_entry(e));

        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            if entry.file_type().is_file() {
                visit(&SourceFile::new(&self.root, entry.into_path()));
            }
        }
    }

    /// Collect the walk into a vector.
    #[must_use]
    pub fn files(&self) -> Vec<SourceFile> {
        let mut files = Vec::new();
        self.walk(|file| files.push(file.clone()));
        files
    }

    fn is_ignored_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        entry
            .path()
            .strip_prefix(&self.root)
            .is_ok_and(|rel| self.filter.is_ignored(rel))
    }
}
