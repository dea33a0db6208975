use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Finding, LocationStyle, ResultSet, RuleGroup, ScanContext, Severity};

use super::{SCRIPT_SOURCES, check_return_spacing};

static EXPORT_FROM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"export\s+.*\s+from\s+['"].*['"]"#).expect("Invalid regex"));
static EXPORT_SPECIFIERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("Invalid regex"));
static DEFAULT_EXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+default\s+").expect("Invalid regex"));

/// Line length, re-export and default-export conventions for script files.
pub struct CodeStyleRules;

#[derive(Default)]
struct CodeStyleScan {
    long_lines: Finding,
    barrels: Finding,
    default_exports: Finding,
}

/// What a file re-exports through `export ... from` statements.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReExports {
    pub wildcard: bool,
    pub identifiers: usize,
}

impl ReExports {
    /// A file may re-export at most one named symbol and no wildcard.
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        self.wildcard || self.identifiers > 1
    }

    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.wildcard {
            parts.push("a wildcard (`*`) export".to_string());
        }
        if self.identifiers > 1 {
            parts.push(format!("{} identifiers", self.identifiers));
        }
        format!("exports {}", parts.join(" and "))
    }
}

impl RuleGroup for CodeStyleRules {
    fn id(&self) -> &'static str {
        "code-style"
    }

    fn title(&self) -> &'static str {
        "Code style"
    }

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet) {
        let max = ctx.settings.code_style.max_line_length;
        let mut scan = CodeStyleScan::default();
        ctx.for_each_source(SCRIPT_SOURCES, |file, content| {
            scan.visit(&file.relative, content, max);
        });
        scan.report(results, max);
        check_return_spacing(ctx, results);
    }
}

impl CodeStyleScan {
    fn visit(&mut self, file: &str, content: &str, max: usize) {
        for (index, line) in content.lines().enumerate() {
            if line.chars().count() > max {
                self.long_lines.record_line(file, index + 1, line);
            }
        }

        let exports = scan_re_exports(content);
        if exports.is_violation() {
            self.barrels.record_note(file, exports.describe());
        }

        if DEFAULT_EXPORT_RE.is_match(content) {
            self.default_exports.record(file, 1);
        }
    }

    fn report(&self, results: &mut ResultSet, max: usize) {
        let long = &self.long_lines;
        results.evaluate(
            Severity::Warning,
            !long.is_empty(),
            "Line lengths are within limits.",
            || {
                long.render(
                    &format!(
                        "Found {} lines exceeding {max} chars. Consider breaking these lines down.",
                        long.count()
                    ),
                    LocationStyle::Excerpts,
                )
            },
        );

        let barrels = &self.barrels;
        results.evaluate(
            Severity::Failed,
            !barrels.is_empty(),
            "No invalid barrel exports found.",
            || {
                barrels.render(
                    &format!(
                        "Found {} files with multiple barrel exports. Only single exports are allowed from a barrel file.",
                        barrels.file_count()
                    ),
                    LocationStyle::Noted,
                )
            },
        );

        let defaults = &self.default_exports;
        results.evaluate(
            Severity::Failed,
            !defaults.is_empty(),
            "No default exports found.",
            || {
                defaults.render(
                    &format!(
                        "Found {} default exports. Always use named exports as per guidelines.",
                        defaults.count()
                    ),
                    LocationStyle::Plain,
                )
            },
        );
    }
}

/// Tally the `export ... from '...'` statements in `content`.
#[must_use]
pub fn scan_re_exports(content: &str) -> ReExports {
    let mut exports = ReExports::default();
    for statement in EXPORT_FROM_RE.find_iter(content).map(|m| m.as_str()) {
        if statement.contains('*') {
            exports.wildcard = true;
            continue;
        }
        if let Some(specifiers) = EXPORT_SPECIFIERS_RE.captures(statement) {
            exports.identifiers += specifiers[1]
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .count();
        }
    }
    exports
}

#[cfg(test)]
#[path = "code_style_tests.rs"]
mod tests;
