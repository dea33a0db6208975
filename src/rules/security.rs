use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Finding, LocationStyle, ResultSet, RuleGroup, ScanContext, Severity};
use crate::scanner::SourceFile;

use super::SCRIPT_SOURCES;

static LOG_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"console\.(log|info|debug|warn|error)\(").expect("Invalid regex")
});
static SENSITIVE_TERM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)password|token|secret").expect("Invalid regex"));
static SCRIPT_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<script\b[^>]*>.*?</script>").expect("Invalid regex"));
static INLINE_HANDLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bon[a-z]+\s*=\s*["'].*?["']"#).expect("Invalid regex"));

const MARKUP_SOURCES: &[&str] = &[".html", ".ejs"];
const EMPTY_SCRIPT: &str = "<script></script>";

/// Type imports, credential logging, inline scripts in markup.
pub struct SecurityRules;

#[derive(Default)]
struct SecurityScan {
    type_imports: usize,
    sensitive_logs: Finding,
    inline_scripts: Finding,
}

impl RuleGroup for SecurityRules {
    fn id(&self) -> &'static str {
        "security"
    }

    fn title(&self) -> &'static str {
        "Security"
    }

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet) {
        let mut scan = SecurityScan::default();
        ctx.walker.walk(|file| scan.visit(file));
        scan.report(results);
    }
}

impl SecurityScan {
    fn visit(&mut self, file: &SourceFile) {
        let is_script = file.has_suffix(SCRIPT_SOURCES);
        let is_markup = file.has_suffix(MARKUP_SOURCES);
        if !is_script && !is_markup {
            return;
        }
        let Some(content) = file.read() else {
            return;
        };

        if is_script {
            if content.contains("import type ") {
                self.type_imports += 1;
            }
            for (number, line) in sensitive_log_calls(&content) {
                self.sensitive_logs.record_line(&file.relative, number, line);
            }
        }
        if is_markup {
            self.inline_scripts
                .record(&file.relative, count_inline_scripts(&content));
        }
    }

    fn report(&self, results: &mut ResultSet) {
        results.evaluate(
            Severity::Warning,
            self.type_imports == 0,
            "Using type imports for better type safety.",
            || "No type imports found. Consider using them.".to_string(),
        );

        let logs = &self.sensitive_logs;
        results.evaluate(
            Severity::Failed,
            !logs.is_empty(),
            "No sensitive data logging detected.",
            || {
                logs.render(
                    &format!(
                        "Found {} potential sensitive data logs. Remove or secure these logs.",
                        logs.count()
                    ),
                    LocationStyle::Excerpts,
                )
            },
        );

        let scripts = &self.inline_scripts;
        results.evaluate(
            Severity::Warning,
            !scripts.is_empty(),
            "No inline scripts found.",
            || {
                scripts.render(
                    &format!(
                        "Found {} inline scripts. Move to external files.",
                        scripts.count()
                    ),
                    LocationStyle::Counted("inline script(s)"),
                )
            },
        );
    }
}

/// Logging calls whose argument list mentions a credential, as
/// `(line number, line text)` of the line the call starts on. A call may span
/// several lines; each line is reported at most once.
#[must_use]
pub fn sensitive_log_calls(content: &str) -> Vec<(usize, &str)> {
    let lines: Vec<&str> = content.lines().collect();
    let mut hits: Vec<(usize, &str)> = Vec::new();

    for call in LOG_CALL_RE.find_iter(content) {
        let arguments = &content[call.end()..call_end(content, call.end())];
        if !SENSITIVE_TERM_RE.is_match(arguments) {
            continue;
        }
        let number = content[..call.start()].matches('\n').count() + 1;
        if hits.last().is_some_and(|(last, _)| *last == number) {
            continue;
        }
        if let Some(&line) = lines.get(number - 1) {
            hits.push((number, line));
        }
    }
    hits
}

/// Byte offset of the parenthesis closing a call whose argument list starts
/// at `start`, or the end of `content` when it is never closed.
fn call_end(content: &str, start: usize) -> usize {
    let mut depth = 1usize;
    for (offset, ch) in content[start..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return start + offset;
                }
            }
            _ => {}
        }
    }
    content.len()
}

/// Inline `<script>` bodies and `on*=` handler attributes. Scripts loaded
/// through `src=` and empty script tags do not count.
#[must_use]
pub fn count_inline_scripts(content: &str) -> usize {
    SCRIPT_BLOCK_RE
        .find_iter(content)
        .chain(INLINE_HANDLER_RE.find_iter(content))
        .map(|m| m.as_str())
        .filter(|m| !m.contains("src=") && *m != EMPTY_SCRIPT)
        .count()
}

#[cfg(test)]
#[path = "security_tests.rs"]
mod tests;
