mod common;

use common::TestFixture;
use predicates::prelude::*;

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn clean_project_exits_success() {
    let fixture = TestFixture::new();
    fixture.create_clean_module("src/math.ts");

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "--color", "never"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Guideline Analysis Summary"))
        .stdout(predicate::str::contains("Failed: 0"));
}

#[test]
fn failed_guideline_exits_one() {
    let fixture = TestFixture::new();
    fixture.create_file("src/App.tsx", "export default function App() {}\n");

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 default exports"));
}

#[test]
fn warn_only_never_fails() {
    let fixture = TestFixture::new();
    fixture.create_file("src/App.tsx", "export default function App() {}\n");

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "--warn-only"])
        .assert()
        .code(0);
}

#[test]
fn strict_fails_on_warnings() {
    let fixture = TestFixture::new();
    fixture.create_long_line("src/copy.ts", 85);

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style"])
        .assert()
        .code(0);

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "--strict"])
        .assert()
        .code(1);
}

#[test]
fn unknown_rule_group_is_a_config_error() {
    let fixture = TestFixture::new();

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "react,linting"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule group: linting"));
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    let fixture = TestFixture::new();

    guideline_guard!()
        .arg(fixture.path())
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn missing_root_is_a_config_error() {
    let fixture = TestFixture::new();

    guideline_guard!()
        .arg(fixture.path().join("nowhere"))
        .assert()
        .code(2);
}

#[test]
fn broken_local_config_falls_back_to_defaults() {
    let fixture = TestFixture::new();
    fixture.create_config("[code_style\nmax_line_length = ");
    fixture.create_clean_module("src/math.ts");

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style"])
        .assert()
        .code(0);
}

// ============================================================================
// Guidelines
// ============================================================================

#[test]
fn over_length_line_is_reported() {
    let fixture = TestFixture::new();
    fixture.create_long_line("src/copy.ts", 85);

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "--color", "never"])
        .assert()
        .stdout(predicate::str::contains("Found 1 lines exceeding 80 chars"))
        .stdout(predicate::str::contains("src/copy.ts"));
}

#[test]
fn max_line_length_flag_overrides_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[code_style]\nmax_line_length = 60\n");
    fixture.create_long_line("src/copy.ts", 85);

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "--max-line-length", "100", "-v"])
        .assert()
        .stdout(predicate::str::contains("Line lengths are within limits."));
}

#[test]
fn local_config_lowers_the_line_limit() {
    let fixture = TestFixture::new();
    fixture.create_config("[code_style]\nmax_line_length = 60\n");
    fixture.create_long_line("src/copy.ts", 70);

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "--color", "never"])
        .assert()
        .stdout(predicate::str::contains("Found 1 lines exceeding 60 chars"));
}

#[test]
fn cursor_rule_sets_the_line_limit() {
    let fixture = TestFixture::new();
    fixture.create_file(
        ".cursor/rules/code-style.mdc",
        "# Code style\n\n- Maximum line length: 50 characters\n",
    );
    fixture.create_long_line("src/copy.ts", 60);

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "--color", "never"])
        .assert()
        .stdout(predicate::str::contains("Found 1 lines exceeding 50 chars"));
}

#[test]
fn class_component_is_a_failure() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "src/Legacy.tsx",
        "class Legacy extends React.Component {\n  render() { return null; }\n}\n",
    );

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "react", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 class components found. Use functions."))
        .stdout(predicate::str::contains("src/Legacy.tsx"));
}

#[test]
fn plural_key_is_a_warning() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "public/translations/en.json",
        r#"{"item_count": "You have {{count}} items"}"#,
    );

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "translations", "--color", "never"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("item_count"));

    fixture.create_file(
        "public/translations/en.json",
        r#"{"item_count_plural": "You have {{count}} items"}"#,
    );

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "translations", "--color", "never"])
        .assert()
        .stdout(predicate::str::contains("item_count").not());
}

#[test]
fn excluded_paths_are_not_scanned() {
    let fixture = TestFixture::new();
    fixture.create_file("legacy/Old.tsx", "export default function Old() {}\n");
    fixture.create_clean_module("src/math.ts");

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "-x", "legacy"])
        .assert()
        .code(0);
}

#[test]
fn gitignored_paths_are_not_scanned() {
    let fixture = TestFixture::new();
    fixture.create_file(".gitignore", "generated/\n");
    fixture.create_file("generated/api.ts", "export default {};\n");
    fixture.create_clean_module("src/math.ts");

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style"])
        .assert()
        .code(0);
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn json_output_is_valid_and_idempotent() {
    let fixture = TestFixture::new();
    fixture.create_file("src/App.tsx", "export default function App() {}\n");
    fixture.create_long_line("src/copy.ts", 90);

    let run = || {
        guideline_guard!()
            .arg(fixture.path())
            .args(["--format", "json"])
            .output()
            .expect("Failed to run binary")
            .stdout
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);

    let json: serde_json::Value = serde_json::from_slice(&first).expect("valid JSON");
    let summary = &json["summary"];
    assert_eq!(
        summary["total"].as_u64().unwrap(),
        summary["passed"].as_u64().unwrap()
            + summary["failed"].as_u64().unwrap()
            + summary["warnings"].as_u64().unwrap()
    );
    assert!(json["failed"].as_array().unwrap().iter().any(|entry| {
        entry["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("Found 1 default exports"))
    }));
}

#[test]
fn output_flag_writes_to_file() {
    let fixture = TestFixture::new();
    fixture.create_clean_module("src/math.ts");
    let report = fixture.path().join("out.json");

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "-f", "json", "-o"])
        .arg(&report)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    assert!(fixture.read("out.json").contains("\"summary\""));
}

#[test]
fn html_report_is_written_alongside_text() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "src/Legacy.tsx",
        "class Legacy extends React.Component {}\n",
    );
    let report = fixture.path().join("guidelines-report.html");

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "react", "--color", "never", "--html-report"])
        .arg(&report)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Guideline Analysis Summary"));

    let html = fixture.read("guidelines-report.html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Convert class components to function components"));
}

#[test]
fn quiet_suppresses_stdout() {
    let fixture = TestFixture::new();
    fixture.create_clean_module("src/math.ts");

    guideline_guard!()
        .arg(fixture.path())
        .args(["--only", "code-style", "-q"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}
