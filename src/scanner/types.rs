use std::path::{Path, PathBuf};

/// A regular file yielded by the tree walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path usable for filesystem access (the scan root joined with the entry).
    pub path: PathBuf,
    /// Root-relative path with forward slashes, used in reports.
    pub relative: String,
}

impl SourceFile {
    #[must_use]
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = relative_display(root, &path);
        Self { path, relative }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// True when the file name ends with any of the given suffixes.
    ///
    /// Suffixes are compared case-sensitively and may span more than one dot
    /// (`.module.css`).
    #[must_use]
    pub fn has_suffix(&self, suffixes: &[&str]) -> bool {
        let name = self.file_name();
        suffixes.iter().any(|suffix| name.ends_with(suffix))
    }

    /// `*.test.*` and `*.spec.*` files.
    #[must_use]
    pub fn is_test_file(&self) -> bool {
        let name = self.file_name();
        name.contains(".test.") || name.contains(".spec.")
    }

    /// True when any directory component of the relative path equals `dir`.
    #[must_use]
    pub fn in_directory(&self, dir: &str) -> bool {
        let mut parts: Vec<&str> = self.relative.split('/').collect();
        parts.pop();
        parts.contains(&dir)
    }

    /// Read the file as UTF-8. Unreadable or non-UTF-8 files yield `None`.
    #[must_use]
    pub fn read(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Some(content),
            Err(e) => {
                log::debug!("Skipping {}: {e}", self.relative);
                None
            }
        }
    }

    /// Size on disk in bytes, following symlinks.
    #[must_use]
    pub fn size(&self) -> Option<u64> {
        std::fs::metadata(&self.path).ok().map(|m| m.len())
    }
}

fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
