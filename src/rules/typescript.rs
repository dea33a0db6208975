use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Finding, LocationStyle, ResultSet, RuleGroup, ScanContext, Severity};

use super::TYPESCRIPT_SOURCES;

static ENUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"enum\s+\w+").expect("Invalid regex"));

const BARREL_NAMES: &[&str] = &["index.ts", "index.tsx"];
const WILDCARD_RE_EXPORT: &str = "export * from";

/// TypeScript conventions for `.ts` / `.tsx` files.
pub struct TypeScriptRules;

#[derive(Default)]
struct TypeScriptScan {
    any_types: Finding,
    enums: Finding,
    default_exports: Finding,
    barrels: Finding,
}

impl RuleGroup for TypeScriptRules {
    fn id(&self) -> &'static str {
        "typescript"
    }

    fn title(&self) -> &'static str {
        "TypeScript"
    }

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet) {
        let mut scan = TypeScriptScan::default();
        ctx.for_each_source(TYPESCRIPT_SOURCES, |file, content| {
            let name = &file.relative;
            scan.any_types.record(name, content.matches(": any").count());
            scan.enums.record(name, ENUM_RE.find_iter(content).count());
            if content.contains("export default") {
                scan.default_exports.record(name, 1);
            }
            if BARREL_NAMES.contains(&file.file_name()) {
                scan.barrels
                    .record(name, content.matches(WILDCARD_RE_EXPORT).count());
            }
        });

        let checks = [
            (
                &scan.any_types,
                "No uses of \"any\" found.",
                "uses of 'any'. Avoid using 'any'.",
            ),
            (&scan.enums, "No enums found.", "enums. Use 'as const' instead."),
            (
                &scan.default_exports,
                "No default exports found.",
                "default exports. Use named exports.",
            ),
            (
                &scan.barrels,
                "No barrel exports found.",
                "barrel exports. Avoid barrel exports.",
            ),
        ];
        for (finding, pass, problem) in checks {
            results.evaluate(Severity::Failed, !finding.is_empty(), pass, || {
                finding.render(
                    &format!("Found {} {problem}", finding.count()),
                    LocationStyle::Plain,
                )
            });
        }
    }
}

#[cfg(test)]
#[path = "typescript_tests.rs"]
mod tests;
