use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Finding, LocationStyle, ResultSet, RuleGroup, ScanContext, Severity};

use super::{REACT_SOURCES, STYLE_SOURCES, check_return_spacing};

static HARDCODED_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#[0-9a-f]{3,6}|rgb\(|rgba\(").expect("Invalid regex"));

const CSS_MODULE_SUFFIXES: &[&str] = &[".module.css", ".module.scss"];

/// CSS conventions: modules over globals, tokens over literal colors.
pub struct StylingRules;

#[derive(Default)]
struct StylingScan {
    css_modules: usize,
    hardcoded_colors: Finding,
    important: Finding,
}

impl RuleGroup for StylingRules {
    fn id(&self) -> &'static str {
        "styling"
    }

    fn title(&self) -> &'static str {
        "Styling"
    }

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet) {
        let mut scan = StylingScan::default();
        ctx.walker.walk(|file| {
            if file.has_suffix(CSS_MODULE_SUFFIXES) {
                scan.css_modules += 1;
            }
            let is_style = file.has_suffix(STYLE_SOURCES);
            if !is_style && !file.has_suffix(REACT_SOURCES) {
                return;
            }
            let Some(content) = file.read() else {
                return;
            };
            scan.hardcoded_colors
                .record(&file.relative, HARDCODED_COLOR_RE.find_iter(&content).count());
            if is_style {
                scan.important
                    .record(&file.relative, content.matches("!important").count());
            }
        });

        scan.report(results);
        check_return_spacing(ctx, results);
    }
}

impl StylingScan {
    fn report(&self, results: &mut ResultSet) {
        results.evaluate(
            Severity::Failed,
            self.css_modules == 0,
            "CSS Modules are being used.",
            || "No CSS Modules found. Should be using CSS Modules.".to_string(),
        );

        let colors = &self.hardcoded_colors;
        results.evaluate(
            Severity::Failed,
            !colors.is_empty(),
            "No hardcoded colors found.",
            || {
                colors.render(
                    &format!(
                        "Found {} hardcoded colors. Use design tokens/variables.",
                        colors.count()
                    ),
                    LocationStyle::Plain,
                )
            },
        );

        let important = &self.important;
        results.evaluate(
            Severity::Warning,
            !important.is_empty(),
            "No !important declarations found. Good CSS specificity.",
            || {
                important.render(
                    &format!(
                        "Found {} !important declarations. Consider refactoring CSS specificity.",
                        important.count()
                    ),
                    LocationStyle::Counted("declarations"),
                )
            },
        );
    }
}

#[cfg(test)]
#[path = "styling_tests.rs"]
mod tests;
