//! Settings embedded in `.cursor/rules/*.mdc` markdown rule files.
//!
//! Rule files are prose, so values are lifted heuristically: find the first
//! line mentioning a setting and take the first number on it.

use std::sync::LazyLock;

use regex::Regex;

use super::model::{MetricOverrides, SettingsOverrides};

pub const CURSOR_RULES_DIR: &str = ".cursor/rules";
pub const RULE_FILE_EXTENSION: &str = "mdc";

static MAX_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Maximum line length: \d+").expect("Invalid regex"));
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*").expect("Invalid regex"));

const FCP_PHRASE: &str = "First Contentful Paint";
const LCP_PHRASE: &str = "Largest Contentful Paint";
const TTFB_PHRASE: &str = "Time to First Byte";
const INP_PHRASE: &str = "Interaction to Next Paint";
const CLS_PHRASE: &str = "Cumulative Layout Shift";

/// Extract overrides from one rule file.
///
/// `file_name` decides which settings the file may carry: names containing
/// `code-style` supply the maximum line length, names containing
/// `performance` supply the web-vitals budget. A performance file sets every
/// metric, using zero for the ones it does not mention.
#[must_use]
pub fn parse_rule_file(file_name: &str, content: &str) -> SettingsOverrides {
    let mut overrides = SettingsOverrides::default();
    let lines: Vec<&str> = content.lines().collect();

    if file_name.contains("code-style") {
        overrides.code_style.max_line_length = first_number(&lines, |l| MAX_LINE_RE.is_match(l))
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|n| *n > 0);
    }

    if file_name.contains("performance") {
        let metric = |phrase: &str| {
            let value = first_number(&lines, |l| l.contains(phrase)).and_then(|n| n.parse().ok());
            Some(value.unwrap_or(0.0))
        };
        overrides.performance.metrics = MetricOverrides {
            fcp: metric(FCP_PHRASE),
            lcp: metric(LCP_PHRASE),
            ttfb: metric(TTFB_PHRASE),
            inp: metric(INP_PHRASE),
            cls: metric(CLS_PHRASE),
        };
    }

    overrides
}

fn first_number<'a>(lines: &[&'a str], matches: impl Fn(&str) -> bool) -> Option<&'a str> {
    let line = lines.iter().find(|l| matches(l))?;
    NUMBER_RE
        .find(line)
        .map(|m| m.as_str().trim_end_matches('.'))
}

#[cfg(test)]
#[path = "cursor_rules_tests.rs"]
mod tests;
