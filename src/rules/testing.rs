use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Finding, LocationStyle, ResultSet, RuleGroup, ScanContext, Severity};

use super::is_test_source;

static TRANSLATION_KEY_ASSERTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"expect\(.*t\(.*\).*\)").expect("Invalid regex"));

/// Assertion style in `*.test.*` / `*.spec.*` files.
pub struct TestingRules;

impl RuleGroup for TestingRules {
    fn id(&self) -> &'static str {
        "testing"
    }

    fn title(&self) -> &'static str {
        "Testing"
    }

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet) {
        let mut in_document = Finding::new();
        let mut key_assertions = Finding::new();
        ctx.walker.walk(|file| {
            if !is_test_source(file) {
                return;
            }
            let Some(content) = file.read() else {
                return;
            };
            if content.contains(".toBeInTheDocument()") {
                in_document.record(&file.relative, 1);
            }
            if TRANSLATION_KEY_ASSERTION_RE.is_match(&content) {
                key_assertions.record(&file.relative, 1);
            }
        });

        results.evaluate(
            Severity::Warning,
            !in_document.is_empty(),
            "No .toBeInTheDocument() usage found.",
            || {
                in_document.render(
                    "Found .toBeInTheDocument() in tests. Prefer .toBeVisible().",
                    LocationStyle::Bulleted,
                )
            },
        );
        results.evaluate(
            Severity::Warning,
            !key_assertions.is_empty(),
            "No tests found asserting against translation keys.",
            || {
                key_assertions.render(
                    "Found tests asserting against translation keys. Assert against rendered text instead.",
                    LocationStyle::Bulleted,
                )
            },
        );
    }
}

#[cfg(test)]
#[path = "testing_tests.rs"]
mod tests;
