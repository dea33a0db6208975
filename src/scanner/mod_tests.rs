use std::path::Path;

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn is_ignored(&self, _relative: &Path) -> bool {
        false
    }
}

struct SkipFixturesFilter;

impl FileFilter for SkipFixturesFilter {
    fn is_ignored(&self, relative: &Path) -> bool {
        relative.starts_with("fixtures")
    }
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn relatives<F: FileFilter>(walker: &TreeWalker<F>) -> Vec<String> {
    walker.files().into_iter().map(|f| f.relative).collect()
}

// =============================================================================
// TreeWalker
// =============================================================================

#[test]
fn walker_visits_every_file_once() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.ts", "");
    write(temp_dir.path(), "src/b.tsx", "");
    write(temp_dir.path(), "src/deep/c.css", "");

    let walker = TreeWalker::new(temp_dir.path(), AcceptAllFilter);
    let files = relatives(&walker);

    assert_eq!(files, vec!["a.ts", "src/b.tsx", "src/deep/c.css"]);
}

#[test]
fn walker_never_yields_directories() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("empty/nested")).unwrap();

    let walker = TreeWalker::new(temp_dir.path(), AcceptAllFilter);

    assert!(walker.files().is_empty());
}

#[test]
fn walker_prunes_ignored_directories() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "fixtures/big.ts", "");
    write(temp_dir.path(), "src/app.ts", "");

    let walker = TreeWalker::new(temp_dir.path(), SkipFixturesFilter);

    assert_eq!(relatives(&walker), vec!["src/app.ts"]);
}

#[test]
fn walker_applies_default_ignore_patterns() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "node_modules/react/index.js", "");
    write(temp_dir.path(), "packages/ui/dist/index.js", "");
    write(temp_dir.path(), "package-lock.json", "{}");
    write(temp_dir.path(), "src/index.ts", "");

    let walker = TreeWalker::new(temp_dir.path(), IgnoreFilter::with_defaults(&[]));

    assert_eq!(relatives(&walker), vec!["package-lock.json", "src/index.ts"]);
}

#[test]
fn walker_order_is_stable_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["zeta.ts", "alpha.ts", "mid/beta.ts", "Mid.ts"] {
        write(temp_dir.path(), name, "");
    }

    let walker = TreeWalker::new(temp_dir.path(), AcceptAllFilter);

    assert_eq!(relatives(&walker), relatives(&walker));
}

#[test]
fn walker_on_missing_root_yields_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let walker = TreeWalker::new(temp_dir.path().join("missing"), AcceptAllFilter);

    assert!(walker.files().is_empty());
}

#[cfg(unix)]
#[test]
fn walker_survives_unreadable_subdirectory() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "locked/hidden.ts", "");
    write(temp_dir.path(), "open/visible.ts", "");
    let locked = temp_dir.path().join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    let walker = TreeWalker::new(temp_dir.path(), AcceptAllFilter);
    let files = relatives(&walker);

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert!(files.contains(&"open/visible.ts".to_string()));
}

// =============================================================================
// SourceFile
// =============================================================================

#[test]
fn source_file_relative_uses_forward_slashes() {
    let root = Path::new("/repo");
    let file = SourceFile::new(root, root.join("src").join("App.tsx"));

    assert_eq!(file.relative, "src/App.tsx");
    assert_eq!(file.file_name(), "App.tsx");
}

#[test]
fn source_file_suffix_and_test_detection() {
    let root = Path::new("/repo");
    let module = SourceFile::new(root, root.join("Button.module.scss"));
    let spec = SourceFile::new(root, root.join("Button.spec.tsx"));
    let plain = SourceFile::new(root, root.join("Button.tsx"));

    assert!(module.has_suffix(&[".module.css", ".module.scss"]));
    assert!(spec.is_test_file());
    assert!(!plain.is_test_file());
}

#[test]
fn source_file_in_directory_checks_parent_components() {
    let root = Path::new("/repo");
    let file = SourceFile::new(root, root.join("public/translations/en.json"));
    let named = SourceFile::new(root, root.join("translations.json"));

    assert!(file.in_directory("translations"));
    assert!(!named.in_directory("translations"));
}

#[test]
fn source_file_read_and_size() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.ts", "const a = 1;\n");
    let file = SourceFile::new(temp_dir.path(), temp_dir.path().join("a.ts"));
    let missing = SourceFile::new(temp_dir.path(), temp_dir.path().join("b.ts"));

    assert_eq!(file.read().as_deref(), Some("const a = 1;\n"));
    assert_eq!(file.size(), Some(13));
    assert!(missing.read().is_none());
}
