use serde::{Deserialize, Serialize};

/// Default maximum line length for the code-style group.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

/// Resolved analysis settings. Built once at startup and never mutated while
/// rule groups run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub code_style: CodeStyleSettings,
    pub performance: PerformanceSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CodeStyleSettings {
    pub max_line_length: usize,
}

impl Default for CodeStyleSettings {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerformanceSettings {
    pub metrics: PerformanceMetrics,
}

/// Web-vitals budget echoed by the performance group.
///
/// Seconds for `fcp`, `lcp` and `ttfb`; milliseconds for `inp`; `cls` is
/// unitless. Zero means "not configured".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerformanceMetrics {
    pub fcp: f64,
    pub lcp: f64,
    pub ttfb: f64,
    pub inp: f64,
    pub cls: f64,
}

// ============================================================================
// Partial settings (one per source, applied in precedence order)
// ============================================================================

/// Values supplied by a single settings source. `None` leaves the lower
/// precedence value in place.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsOverrides {
    pub code_style: CodeStyleOverrides,
    pub performance: PerformanceOverrides,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CodeStyleOverrides {
    pub max_line_length: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceOverrides {
    pub metrics: MetricOverrides,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MetricOverrides {
    pub fcp: Option<f64>,
    pub lcp: Option<f64>,
    pub ttfb: Option<f64>,
    pub inp: Option<f64>,
    pub cls: Option<f64>,
}

impl Settings {
    /// Overlay the values present in `overrides`.
    pub fn apply(&mut self, overrides: &SettingsOverrides) {
        if let Some(max) = overrides.code_style.max_line_length {
            self.code_style.max_line_length = max;
        }
        let metrics = &mut self.performance.metrics;
        let incoming = overrides.performance.metrics;
        for (slot, value) in [
            (&mut metrics.fcp, incoming.fcp),
            (&mut metrics.lcp, incoming.lcp),
            (&mut metrics.ttfb, incoming.ttfb),
            (&mut metrics.inp, incoming.inp),
            (&mut metrics.cls, incoming.cls),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
