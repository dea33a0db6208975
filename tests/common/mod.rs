#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the guideline-guard binary.
#[macro_export]
macro_rules! guideline_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("guideline-guard"))
    };
}

/// A throwaway project tree for driving the binary.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, including parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".guideline-guard.toml", content);
    }

    /// A module that passes every code-style check.
    pub fn create_clean_module(&self, relative_path: &str) {
        self.create_file(
            relative_path,
            "export const total = (a: number, b: number) => {\n  const sum = a + b;\n\n  return sum;\n};\n",
        );
    }

    /// A module with a single line of `length` characters.
    pub fn create_long_line(&self, relative_path: &str, length: usize) {
        let line = format!("export const s = '{}';\n", "x".repeat(length - 20));
        self.create_file(relative_path, &line);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
