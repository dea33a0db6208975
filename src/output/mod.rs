mod html;
mod html_template;
mod json;
mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checker::ResultSet;
use crate::error::Result;

/// Trait for formatting a result set into various output formats.
pub trait OutputFormatter {
    /// Format the results into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, results: &ResultSet) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Split an entry into its headline and its non-blank location lines.
#[must_use]
pub fn split_message(entry: &str) -> (&str, Vec<&str>) {
    let mut lines = entry.lines();
    let headline = lines.next().unwrap_or_default();
    let details = lines
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .collect();
    (headline, details)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
