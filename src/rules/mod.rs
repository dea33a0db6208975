//! The built-in rule groups.
//!
//! Every group is a pattern scanner over file text; none of them parse
//! source code, so results are heuristics.

mod accessibility;
mod code_style;
mod performance;
mod react;
mod security;
mod state;
mod styling;
mod testing;
mod translation;
mod typescript;

pub use accessibility::AccessibilityRules;
pub use code_style::CodeStyleRules;
pub use performance::PerformanceRules;
pub use react::ReactRules;
pub use security::SecurityRules;
pub use state::StateManagementRules;
pub use styling::StylingRules;
pub use testing::TestingRules;
pub use translation::TranslationRules;
pub use typescript::TypeScriptRules;

use crate::checker::{Finding, LocationStyle, ResultSet, RuleGroup, ScanContext, Severity};
use crate::scanner::SourceFile;

pub const REACT_SOURCES: &[&str] = &[".tsx", ".jsx"];
pub const SCRIPT_SOURCES: &[&str] = &[".ts", ".tsx", ".js", ".jsx"];
pub const TYPESCRIPT_SOURCES: &[&str] = &[".ts", ".tsx"];
pub const STYLE_SOURCES: &[&str] = &[".css", ".scss"];

/// Every built-in group, in the order results are emitted.
#[must_use]
pub fn default_rule_groups() -> Vec<Box<dyn RuleGroup>> {
    vec![
        Box::new(ReactRules),
        Box::new(StylingRules),
        Box::new(AccessibilityRules),
        Box::new(CodeStyleRules),
        Box::new(PerformanceRules),
        Box::new(SecurityRules),
        Box::new(StateManagementRules),
        Box::new(TestingRules),
        Box::new(TranslationRules),
        Box::new(TypeScriptRules),
    ]
}

/// `*.test.*` / `*.spec.*` script files.
#[must_use]
pub fn is_test_source(file: &SourceFile) -> bool {
    file.is_test_file() && file.has_suffix(SCRIPT_SOURCES)
}

/// 1-based numbers of lines starting with `return` that directly follow a
/// non-blank line. The first line is never flagged.
#[must_use]
pub fn returns_without_blank_line(content: &str) -> Vec<usize> {
    let lines: Vec<&str> = content.lines().collect();
    lines
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1].trim().starts_with("return") && !pair[0].trim().is_empty())
        .map(|(i, _)| i + 2)
        .collect()
}

/// Blank-line-before-return check shared by the styling and code-style
/// groups.
pub fn check_return_spacing(ctx: &ScanContext<'_>, results: &mut ResultSet) {
    let mut finding = Finding::new();
    ctx.for_each_source(SCRIPT_SOURCES, |file, content| {
        for number in returns_without_blank_line(content) {
            finding.record_line(&file.relative, number, "");
        }
    });

    results.evaluate(
        Severity::Warning,
        !finding.is_empty(),
        "Found proper spacing before return statements.",
        || {
            finding.render(
                "Found missing blank lines before return statements in these files:",
                LocationStyle::Lines,
            )
        },
    );
}

#[cfg(test)]
#[path = "test_support.rs"]
mod test_support;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
