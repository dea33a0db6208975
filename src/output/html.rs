use std::fmt::Write;

use crate::checker::{ResultSet, Summary};
use crate::error::Result;

use super::html_template::{HTML_FOOTER, HTML_HEADER};
use super::{OutputFormatter, split_message};

/// HTML formatter for generating standalone HTML reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormatter;

/// Urgency shown on warning entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl HtmlFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_summary(output: &mut String, summary: &Summary) {
        output.push_str("        <div class=\"summary-grid\">\n");
        for (class, label, value) in [
            ("total", "Total Checks", summary.total),
            ("passed", "✓ Passed", summary.passed),
            ("failed", "✗ Failed", summary.failed),
            ("warning", "⚠ Warnings", summary.warnings),
        ] {
            writeln!(
                output,
                "            <div class=\"summary-card {class}\"><span class=\"value\">{value}</span><span class=\"label\">{label}</span></div>"
            )
            .ok();
        }
        output.push_str("        </div>\n");
    }

    fn open_section(output: &mut String, id: &str, title: &str, count: usize, badge: &str) {
        let open = if count > 0 && id != "passed-section" {
            " open"
        } else {
            ""
        };
        writeln!(
            output,
            "        <details class=\"section\" id=\"{id}\"{open}>\n            <summary>{title} <span class=\"badge {badge}\">{count}</span></summary>\n            <ul class=\"entries\">"
        )
        .ok();
    }

    fn close_section(output: &mut String) {
        output.push_str("            </ul>\n        </details>\n");
    }

    fn write_file_list(output: &mut String, details: &[&str]) {
        if details.is_empty() {
            return;
        }
        output.push_str("                    <div class=\"file-list\">\n");
        for detail in details {
            writeln!(
                output,
                "                        <div class=\"file-entry\">{}</div>",
                html_escape(detail.trim())
            )
            .ok();
        }
        output.push_str("                    </div>\n");
    }

    fn write_passed(output: &mut String, entries: &[String]) {
        Self::open_section(output, "passed-section", "✓ Passing Guidelines", entries.len(), "");
        for entry in entries {
            writeln!(
                output,
                "                <li class=\"passed\">✓ {}</li>",
                html_escape(entry)
            )
            .ok();
        }
        Self::close_section(output);
    }

    fn write_failed(output: &mut String, entries: &[String]) {
        Self::open_section(output, "failed-section", "✗ Failed Guidelines", entries.len(), "high");
        for entry in entries {
            let (headline, details) = split_message(entry);
            writeln!(
                output,
                "                <li class=\"failed\"><details>\n                    <summary>✗ {}</summary>",
                html_escape(headline)
            )
            .ok();
            Self::write_file_list(output, &details);
            writeln!(
                output,
                "                    <div class=\"details\"><strong>Category:</strong> {}</div>",
                failure_category(headline)
            )
            .ok();
            if let Some(suggestion) = failure_suggestion(headline) {
                writeln!(
                    output,
                    "                    <div class=\"suggestion\"><strong>Suggestion:</strong> {}</div>",
                    html_escape(suggestion)
                )
                .ok();
            }
            output.push_str("                </details></li>\n");
        }
        Self::close_section(output);
    }

    fn write_warnings(output: &mut String, entries: &[String]) {
        Self::open_section(output, "warnings-section", "⚠ Warnings", entries.len(), "medium");
        for entry in entries {
            let (headline, details) = split_message(entry);
            let priority = warning_priority(entry).as_str();
            writeln!(
                output,
                "                <li class=\"warning\"><details>\n                    <summary>⚠ {} <span class=\"badge {priority}\">{priority} priority</span></summary>",
                html_escape(headline)
            )
            .ok();
            writeln!(
                output,
                "                    <div class=\"details\"><strong>Category:</strong> {}</div>",
                warning_category(entry)
            )
            .ok();
            Self::write_file_list(output, &details);
            let steps = warning_recommendations(entry);
            if !steps.is_empty() {
                output.push_str(
                    "                    <div class=\"recommendation\"><strong>Recommendations:</strong>\n                        <ul>\n",
                );
                for step in steps {
                    writeln!(output, "                            <li>{}</li>", html_escape(step)).ok();
                }
                output.push_str("                        </ul>\n                    </div>\n");
            }
            output.push_str("                </details></li>\n");
        }
        Self::close_section(output);
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, results: &ResultSet) -> Result<String> {
        let snapshot = results.snapshot();
        let mut output = String::from(HTML_HEADER);

        Self::write_summary(&mut output, &results.summary());
        Self::write_passed(&mut output, snapshot.passed);
        Self::write_failed(&mut output, snapshot.failed);
        if !snapshot.warnings.is_empty() {
            Self::write_warnings(&mut output, snapshot.warnings);
        }

        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}

/// Area a failed entry belongs to, judged from its headline.
#[must_use]
pub fn failure_category(headline: &str) -> &'static str {
    if headline.contains("TypeScript") || headline.contains("type") {
        "TypeScript"
    } else if headline.contains("component") || headline.contains("React") {
        "React"
    } else if headline.contains("CSS") || headline.contains("style") {
        "Styling"
    } else {
        "Other"
    }
}

/// Remediation hint for the most common failures.
#[must_use]
pub fn failure_suggestion(headline: &str) -> Option<&'static str> {
    const SUGGESTIONS: &[(&str, &str)] = &[
        (
            "class components",
            "Convert class components to function components using hooks for better maintainability and reduced bundle size.",
        ),
        (
            "inline style",
            "Move styles to CSS modules or styled-components for better maintainability and performance.",
        ),
        (
            "error boundaries",
            "Implement error boundaries at key points in your component tree to gracefully handle runtime errors.",
        ),
        (
            "hardcoded colors",
            "Use CSS variables or a theme system to maintain consistent colors across the application.",
        ),
    ];
    SUGGESTIONS
        .iter()
        .find(|(needle, _)| headline.contains(needle))
        .map(|(_, suggestion)| *suggestion)
}

#[must_use]
pub fn warning_category(entry: &str) -> &'static str {
    if entry.contains("performance") || entry.contains("optimization") {
        "Performance"
    } else if entry.contains("accessibility") || entry.contains("ARIA") {
        "Accessibility"
    } else if entry.contains("security") || entry.contains("script") {
        "Security"
    } else {
        "Other"
    }
}

#[must_use]
pub fn warning_priority(entry: &str) -> Priority {
    if warning_category(entry) == "Security" || entry.contains("sensitive") {
        Priority::High
    } else if entry.contains("optimization") || entry.contains("suggestion") {
        Priority::Low
    } else {
        Priority::Medium
    }
}

#[must_use]
pub fn warning_recommendations(entry: &str) -> &'static [&'static str] {
    if entry.contains("inline scripts") {
        &[
            "Move inline JavaScript to external .js files",
            "Use defer attribute for non-critical scripts",
            "Consider using module type scripts",
            "Implement proper CSP headers",
        ]
    } else if entry.contains("keyboard navigation") {
        &[
            "Add focusable elements with tabIndex",
            "Implement keyboard event handlers",
            "Add visible focus indicators",
            "Test with screen readers",
        ]
    } else if entry.contains("!important declarations") {
        &[
            "Use more specific selectors instead of !important",
            "Review CSS specificity hierarchy",
            "Consider using CSS modules or scoped styles",
            "Refactor styles to use proper cascading",
        ]
    } else {
        &[]
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
