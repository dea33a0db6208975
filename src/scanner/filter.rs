use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{GuidelineGuardError, Result};

/// Name of the project ignore file read from the scan root.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Exclusions that apply to every scan, whether or not an ignore file exists.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    ".DS_Store",
    "coverage",
    "test/_coverage",
    "test/.DS_Store",
    "yarn-error.log",
    "!/package-lock.json",
    ".idea",
    ".vscode",
    "jscpd-report",
    "webpack/coverage",
    "libs/*/coverage",
    "scripts",
    "accessibility-report.html",
    "pa11y-reports",
    "guidelines-report.html",
];

pub trait FileFilter {
    /// Returns true when `relative` (a root-relative path) must be skipped.
    fn is_ignored(&self, relative: &Path) -> bool;
}

/// Ignore-file style path filter.
///
/// Every pattern is compiled to a pair of globs: one for the path itself and
/// one for everything nested below it, so a directory name excludes its whole
/// subtree. Patterns without a leading `/` float to any depth; `*` crosses
/// path separators. Lines starting with `!` re-include what earlier patterns
/// exclude. The last matching pattern decides.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    globs: GlobSet,
    /// Negation flag for each glob in `globs`, by index.
    negated: Vec<bool>,
    patterns: Vec<String>,
}

impl IgnoreFilter {
    /// Build a filter from the given patterns only.
    ///
    /// Patterns that fail to compile are logged and skipped.
    #[must_use]
    pub fn new(patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut flags = Vec::new();
        let mut accepted = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let (negated, body) = match pattern.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, pattern.as_str()),
            };
            match compile_pattern(body) {
                Ok(globs) => {
                    for glob in globs {
                        builder.add(glob);
                        flags.push(negated);
                    }
                    accepted.push(pattern.clone());
                }
                Err(e) => log::warn!("Skipping ignore pattern: {e}"),
            }
        }

        Self {
            globs: build_set(builder),
            negated: flags,
            patterns: accepted,
        }
    }

    /// Build a filter from the defaults plus `extra` patterns.
    #[must_use]
    pub fn with_defaults(extra: &[String]) -> Self {
        let mut patterns: Vec<String> = DEFAULT_IGNORE_PATTERNS
            .iter()
            .map(ToString::to_string)
            .collect();
        patterns.extend(extra.iter().cloned());
        Self::new(&patterns)
    }

    /// Build a filter from the defaults, the root's ignore file and `extra`.
    ///
    /// A missing ignore file is normal. An unreadable one is logged and the
    /// defaults are used alone.
    #[must_use]
    pub fn load(root: &Path, extra: &[String]) -> Self {
        let ignore_file = root.join(IGNORE_FILE_NAME);
        let mut patterns = Vec::new();
        if ignore_file.exists() {
            match std::fs::read_to_string(&ignore_file) {
                Ok(content) => patterns = parse_ignore_lines(&content),
                Err(e) => log::warn!(
                    "Error reading {}: {e}; using default ignore patterns",
                    ignore_file.display()
                ),
            }
        }
        patterns.extend(extra.iter().cloned());
        Self::with_defaults(&patterns)
    }

    /// Patterns that compiled successfully, in the order given.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// String form of [`FileFilter::is_ignored`].
    #[must_use]
    pub fn is_ignored_str(&self, relative: &str) -> bool {
        let normalized = normalize(relative);
        if normalized.is_empty() {
            return false;
        }
        self.globs
            .matches(normalized.as_str())
            .into_iter()
            .max()
            .is_some_and(|last| !self.negated.get(last).copied().unwrap_or(false))
    }
}

impl FileFilter for IgnoreFilter {
    fn is_ignored(&self, relative: &Path) -> bool {
        self.is_ignored_str(&relative.to_string_lossy())
    }
}

/// Split ignore-file content into pattern lines, dropping blanks and comments.
#[must_use]
pub fn parse_ignore_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

fn normalize(path: &str) -> String {
    let forward = path.replace('\\', "/");
    let trimmed = forward.trim_start_matches("./").trim_start_matches('/');
    trimmed.trim_end_matches('/').to_string()
}

fn compile_pattern(pattern: &str) -> Result<Vec<globset::Glob>> {
    let (anchored, body) = match pattern.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, pattern),
    };
    let body = escape_glob(body.trim_end_matches('/'));
    if body.is_empty() {
        return Err(GuidelineGuardError::Config(format!(
            "empty ignore pattern: {pattern:?}"
        )));
    }

    let base = if anchored || body.starts_with("**/") {
        body
    } else {
        format!("**/{body}")
    };

    [base.clone(), format!("{base}/**")]
        .iter()
        .map(|glob| {
            GlobBuilder::new(glob)
                .literal_separator(false)
                .backslash_escape(true)
                .build()
                .map_err(|source| GuidelineGuardError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
        })
        .collect()
}

/// Escape glob metacharacters so only `*` keeps a special meaning.
fn escape_glob(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        if matches!(ch, '?' | '[' | ']' | '{' | '}' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn build_set(builder: GlobSetBuilder) -> GlobSet {
    builder.build().unwrap_or_else(|e| {
        log::warn!("Failed to combine ignore patterns: {e}");
        GlobSet::empty()
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
