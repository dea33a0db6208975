use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Finding, LocationStyle, ResultSet, RuleGroup, ScanContext, Severity};
use crate::scanner::SourceFile;

use super::REACT_SOURCES;

static ARIA_ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"aria-[a-z]+").expect("Invalid regex"));
static ROLE_ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"role=["'][a-z]+["']"#).expect("Invalid regex"));

/// Fewer component files with keyboard handlers than this warns.
pub const MIN_KEYBOARD_FILES: usize = 10;
/// Fewer ARIA attributes than this warns.
pub const MIN_ARIA_ATTRIBUTES: usize = 20;
/// Fewer role attributes than this warns.
pub const MIN_ROLE_ATTRIBUTES: usize = 20;

const KEYBOARD_HANDLERS: &[&str] = &["onKeyDown", "onKeyPress", "onKeyUp"];
const TRANSLATION_RESOURCE_SUFFIXES: &[&str] = &[".json", ".yml"];

/// Accessibility density heuristics over non-test components.
pub struct AccessibilityRules;

#[derive(Default)]
struct AccessibilityScan {
    translation_files: usize,
    keyboard: Finding,
    aria: Finding,
    roles: Finding,
}

impl RuleGroup for AccessibilityRules {
    fn id(&self) -> &'static str {
        "accessibility"
    }

    fn title(&self) -> &'static str {
        "Accessibility"
    }

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet) {
        let mut scan = AccessibilityScan::default();
        ctx.walker.walk(|file| scan.visit(file));
        scan.report(results);
    }
}

impl AccessibilityScan {
    fn visit(&mut self, file: &SourceFile) {
        if is_translation_resource(file) {
            self.translation_files += 1;
        }

        if !file.has_suffix(REACT_SOURCES) || file.is_test_file() {
            return;
        }
        let Some(content) = file.read() else {
            return;
        };
        if KEYBOARD_HANDLERS.iter().any(|h| content.contains(h)) {
            self.keyboard.record(&file.relative, 1);
        }
        self.aria
            .record(&file.relative, ARIA_ATTRIBUTE_RE.find_iter(&content).count());
        self.roles
            .record(&file.relative, ROLE_ATTRIBUTE_RE.find_iter(&content).count());
    }

    fn report(&self, results: &mut ResultSet) {
        results.evaluate(
            Severity::Failed,
            self.translation_files == 0,
            "Translation files are present.",
            || "No translation files found. All text should be in translation files.".to_string(),
        );

        let keyboard = &self.keyboard;
        results.evaluate(
            Severity::Warning,
            keyboard.count() < MIN_KEYBOARD_FILES,
            "Sufficient keyboard navigation controls found.",
            || {
                keyboard.render(
                    &format!(
                        "Found only {} instances of keyboard navigation controls (e.g., tabIndex). Ensure app is navigable via keyboard.",
                        keyboard.count()
                    ),
                    LocationStyle::Plain,
                )
            },
        );

        let aria = &self.aria;
        results.evaluate(
            Severity::Warning,
            aria.count() < MIN_ARIA_ATTRIBUTES,
            "Sufficient ARIA attributes found.",
            || {
                aria.render(
                    &format!(
                        "Found only {} ARIA attributes. Ensure components are accessible.",
                        aria.count()
                    ),
                    LocationStyle::Plain,
                )
            },
        );

        let roles = &self.roles;
        results.evaluate(
            Severity::Warning,
            roles.count() < MIN_ROLE_ATTRIBUTES,
            "Sufficient role attributes found.",
            || {
                roles.render(
                    &format!(
                        "Found only {} role attributes. Ensure semantic roles are used.",
                        roles.count()
                    ),
                    LocationStyle::Plain,
                )
            },
        );
    }
}

/// Files under a `translations` directory, or JSON/YAML files that mention
/// translations.
fn is_translation_resource(file: &SourceFile) -> bool {
    if file.in_directory("translations") {
        return true;
    }
    file.has_suffix(TRANSLATION_RESOURCE_SUFFIXES)
        && file.read().is_some_and(|c| c.contains("translations"))
}

#[cfg(test)]
#[path = "accessibility_tests.rs"]
mod tests;
