use crate::checker::{Finding, LocationStyle, ResultSet, RuleGroup, ScanContext, Severity};
use crate::config::PerformanceMetrics;
use crate::scanner::SourceFile;

use super::REACT_SOURCES;

/// Files larger than this are reported as heavy assets.
pub const LARGE_ASSET_BYTES: u64 = 100 * 1024;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Asset classes, in report order.
const ASSET_CLASSES: &[(&str, &[&str])] = &[
    (
        "images",
        &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico"],
    ),
    ("fonts", &[".woff", ".woff2", ".ttf", ".otf", ".eot"]),
    ("scripts", &[".js", ".jsx", ".ts", ".tsx"]),
    ("styles", &[".css", ".scss"]),
];

/// Performance budget echo, memoization and data-fetching hooks, heavy assets.
pub struct PerformanceRules;

impl RuleGroup for PerformanceRules {
    fn id(&self) -> &'static str {
        "performance"
    }

    fn title(&self) -> &'static str {
        "Performance"
    }

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet) {
        results.record_warning(budget_message(&ctx.settings.performance.metrics));

        let mut memo = 0;
        let mut callback = 0;
        let mut query = 0;
        ctx.for_each_source(REACT_SOURCES, |_, content| {
            memo += usize::from(content.contains("useMemo("));
            callback += usize::from(content.contains("useCallback("));
            query += usize::from(content.contains("useQuery(") || content.contains("useMutation("));
        });

        report_large_assets(ctx, results);

        results.evaluate(
            Severity::Warning,
            memo == 0,
            format!("Found {memo} useMemo optimizations."),
            || "No useMemo optimizations found.".to_string(),
        );
        results.evaluate(
            Severity::Warning,
            callback == 0,
            format!("Found {callback} useCallback optimizations."),
            || "No useCallback optimizations found.".to_string(),
        );
        results.evaluate(
            Severity::Warning,
            query == 0,
            format!("Found {query} React Query usages."),
            || "No React Query usage found.".to_string(),
        );
    }
}

/// The configured web-vitals budget, always emitted as a warning.
#[must_use]
pub fn budget_message(metrics: &PerformanceMetrics) -> String {
    format!(
        "Performance targets:\n- FCP: {}s, LCP: {}s, TTFB: {}s, INP: {}ms, CLS: {}",
        metrics.fcp, metrics.lcp, metrics.ttfb, metrics.inp, metrics.cls
    )
}

/// `1.50MB` at or above one MiB, `120.0KB` below it.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let bytes = bytes as f64;
    if bytes >= MIB {
        format!("{:.2}MB", bytes / MIB)
    } else {
        format!("{:.1}KB", bytes / KIB)
    }
}

fn asset_class(file: &SourceFile) -> Option<usize> {
    ASSET_CLASSES
        .iter()
        .position(|(_, suffixes)| file.has_suffix(suffixes))
}

fn report_large_assets(ctx: &ScanContext<'_>, results: &mut ResultSet) {
    let mut by_class: Vec<Finding> = vec![Finding::new(); ASSET_CLASSES.len()];
    ctx.walker.walk(|file| {
        let Some(class) = asset_class(file) else {
            return;
        };
        if let Some(size) = file.size().filter(|s| *s > LARGE_ASSET_BYTES) {
            by_class[class].record_note(&file.relative, format_size(size));
        }
    });

    if by_class.iter().all(Finding::is_empty) {
        results.record_pass("No large static assets found (>100KB).");
        return;
    }
    for ((name, _), assets) in ASSET_CLASSES.iter().zip(&by_class) {
        if !assets.is_empty() {
            results.record_warning(assets.render(
                &format!("Found {} large {name} assets (>100KB):", assets.count()),
                LocationStyle::Noted,
            ));
        }
    }
}

#[cfg(test)]
#[path = "performance_tests.rs"]
mod tests;
