mod directory;
mod filter;
mod types;

pub use directory::TreeWalker;
pub use filter::{
    DEFAULT_IGNORE_PATTERNS, FileFilter, IGNORE_FILE_NAME, IgnoreFilter, parse_ignore_lines,
};
pub use types::SourceFile;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
