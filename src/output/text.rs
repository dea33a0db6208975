use std::fmt::Write;

use crate::checker::{ResultSet, Summary};
use crate::error::Result;

use super::{OutputFormatter, split_message};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

const SUMMARY_TITLE: &str = "--- Guideline Analysis Summary ---";
const SUMMARY_RULE: &str = "----------------------------------";

#[derive(Clone, Copy)]
enum Bucket {
    Passed,
    Failed,
    Warning,
}

impl Bucket {
    const fn icon(self) -> &'static str {
        match self {
            Self::Passed => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Warning => "WARNING",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::Passed => ansi::GREEN,
            Self::Failed => ansi::RED,
            Self::Warning => ansi::YELLOW,
        }
    }
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// With `verbose > 0` passed entries are listed too.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_entry(&self, output: &mut String, bucket: Bucket, entry: &str) {
        let (headline, details) = split_message(entry);
        let status = self.paint(bucket.label(), bucket.color());
        writeln!(output, "{} {status}: {headline}", bucket.icon()).ok();
        for line in details {
            writeln!(output, "   {line}").ok();
        }
    }

    fn format_summary(&self, output: &mut String, summary: &Summary) {
        writeln!(output, "\n{}", self.paint(SUMMARY_TITLE, ansi::BOLD)).ok();
        writeln!(output, "Total Checks: {}", summary.total).ok();
        let rows = [
            (Bucket::Passed, "Passed", summary.passed),
            (Bucket::Failed, "Failed", summary.failed),
            (Bucket::Warning, "Warnings", summary.warnings),
        ];
        for (bucket, name, count) in rows {
            let line = format!("{} {name}: {count}", bucket.icon());
            writeln!(output, "{}", self.paint(&line, bucket.color())).ok();
        }
        writeln!(output, "{SUMMARY_RULE}").ok();
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &ResultSet) -> Result<String> {
        let snapshot = results.snapshot();
        let mut output = String::new();

        for entry in snapshot.failed {
            self.format_entry(&mut output, Bucket::Failed, entry);
        }
        for entry in snapshot.warnings {
            self.format_entry(&mut output, Bucket::Warning, entry);
        }
        if self.verbose > 0 {
            for entry in snapshot.passed {
                self.format_entry(&mut output, Bucket::Passed, entry);
            }
        }

        self.format_summary(&mut output, &results.summary());
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
