use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Finding, LocationStyle, ResultSet, RuleGroup, ScanContext, Severity};

use super::REACT_SOURCES;

static CLASS_COMPONENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"class\s+\w+\s+extends\s+(React\.)?Component").expect("Invalid regex")
});
static CONDITIONAL_RENDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{.*\?.*:.*\}|\{.*&&.*\}").expect("Invalid regex"));
static PROPS_ACCESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"props\.[A-Za-z0-9_]+").expect("Invalid regex"));

/// Inline conditionals tolerated across the whole tree before warning.
pub const CONDITIONAL_RENDER_LIMIT: usize = 10;

/// React component conventions for `.tsx` / `.jsx` files.
pub struct ReactRules;

#[derive(Default)]
struct ReactScan {
    class_components: Finding,
    inline_styles: Finding,
    fc_types: Finding,
    error_boundaries: usize,
    lazy_loads: usize,
    conditionals: Finding,
    direct_props: Finding,
}

impl RuleGroup for ReactRules {
    fn id(&self) -> &'static str {
        "react"
    }

    fn title(&self) -> &'static str {
        "React"
    }

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet) {
        let mut scan = ReactScan::default();
        ctx.for_each_source(REACT_SOURCES, |file, content| {
            scan.visit(&file.relative, content);
        });
        scan.report_components(results);
        scan.report_patterns(results);
    }
}

impl ReactScan {
    fn visit(&mut self, file: &str, content: &str) {
        self.class_components
            .record(file, CLASS_COMPONENT_RE.find_iter(content).count());

        if content.contains("style={{") {
            self.inline_styles.record(file, 1);
        }
        if content.contains("FC<") || content.contains("FunctionComponent<") {
            self.fc_types.record(file, 1);
        }
        if content.contains("componentDidCatch")
            || content.contains("static getDerivedStateFromError")
        {
            self.error_boundaries += 1;
        }
        if content.contains("React.lazy") || content.contains("lazy(() =>") {
            self.lazy_loads += 1;
        }

        self.conditionals
            .record(file, CONDITIONAL_RENDER_RE.find_iter(content).count());
        self.direct_props.record(file, count_direct_props(content));
    }

    fn report_components(&self, results: &mut ResultSet) {
        let classes = &self.class_components;
        results.evaluate(
            Severity::Failed,
            !classes.is_empty(),
            "No class components found.",
            || {
                classes.render(
                    &format!("{} class components found. Use functions.", classes.count()),
                    LocationStyle::Plain,
                )
            },
        );

        let styles = &self.inline_styles;
        results.evaluate(
            Severity::Failed,
            !styles.is_empty(),
            "No inline styles found.",
            || {
                styles.render(
                    &format!("{} inline style instances found. Use modules.", styles.count()),
                    LocationStyle::Plain,
                )
            },
        );

        let fc = &self.fc_types;
        results.evaluate(
            Severity::Failed,
            !fc.is_empty(),
            "No FC/FunctionComponent usage found.",
            || {
                fc.render(
                    &format!(
                        "{} uses of FC/FunctionComponent type found. Avoid them.",
                        fc.count()
                    ),
                    LocationStyle::Plain,
                )
            },
        );

        results.evaluate(
            Severity::Failed,
            self.error_boundaries == 0,
            format!("{} error boundaries found.", self.error_boundaries),
            || "No error boundaries found. Use them for graceful error handling.".to_string(),
        );

        results.evaluate(
            Severity::Failed,
            self.lazy_loads == 0,
            format!("{} lazy-loaded components found.", self.lazy_loads),
            || "No lazy loading found. Use it for conditional components.".to_string(),
        );
    }

    fn report_patterns(&self, results: &mut ResultSet) {
        let props = &self.direct_props;
        results.evaluate(
            Severity::Warning,
            !props.is_empty(),
            "Props seem to be destructured correctly.",
            || {
                props.render(
                    &format!(
                        "Found {} instances of direct props access. Consider destructuring.",
                        props.count()
                    ),
                    LocationStyle::Counted("instances"),
                )
            },
        );

        let conditionals = &self.conditionals;
        results.evaluate(
            Severity::Warning,
            conditionals.count() > CONDITIONAL_RENDER_LIMIT,
            "Reasonable use of conditional rendering.",
            || {
                conditionals.render(
                    &format!(
                        "Found {} conditional renders. Consider extracting complex conditions into components.",
                        conditionals.count()
                    ),
                    LocationStyle::Counted("conditionals"),
                )
            },
        );
    }
}

/// `props.x` accesses not reached through `this.props`.
fn count_direct_props(content: &str) -> usize {
    PROPS_ACCESS_RE
        .find_iter(content)
        .filter(|m| !content[..m.start()].ends_with("this."))
        .count()
}

#[cfg(test)]
#[path = "react_tests.rs"]
mod tests;
