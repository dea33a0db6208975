use super::*;

#[test]
fn defaults_match_documented_values() {
    let settings = Settings::default();
    assert_eq!(settings.code_style.max_line_length, 80);
    assert_eq!(settings.performance.metrics, PerformanceMetrics::default());
    assert!(settings.performance.metrics.fcp.abs() < f64::EPSILON);
}

#[test]
fn apply_overlays_only_present_values() {
    let mut settings = Settings::default();
    settings.performance.metrics.lcp = 2.5;

    let overrides = SettingsOverrides {
        code_style: CodeStyleOverrides {
            max_line_length: Some(120),
        },
        performance: PerformanceOverrides {
            metrics: MetricOverrides {
                fcp: Some(1.8),
                ..MetricOverrides::default()
            },
        },
    };
    settings.apply(&overrides);

    assert_eq!(settings.code_style.max_line_length, 120);
    assert!((settings.performance.metrics.fcp - 1.8).abs() < f64::EPSILON);
    assert!((settings.performance.metrics.lcp - 2.5).abs() < f64::EPSILON);
}

#[test]
fn empty_overrides_change_nothing() {
    let mut settings = Settings::default();
    settings.apply(&SettingsOverrides::default());
    assert_eq!(settings, Settings::default());
}

#[test]
fn overrides_parse_from_toml() {
    let overrides: SettingsOverrides = toml::from_str(
        r"
[code_style]
max_line_length = 100

[performance.metrics]
inp = 200
cls = 0.1
",
    )
    .unwrap();

    assert_eq!(overrides.code_style.max_line_length, Some(100));
    assert_eq!(overrides.performance.metrics.inp, Some(200.0));
    assert_eq!(overrides.performance.metrics.fcp, None);
}

#[test]
fn overrides_reject_unknown_keys() {
    let result = toml::from_str::<SettingsOverrides>("[code_style]\nmax_line = 90\n");
    assert!(result.is_err());
}

#[test]
fn settings_partial_toml_fills_defaults() {
    let settings: Settings = toml::from_str("[performance.metrics]\nttfb = 0.8\n").unwrap();
    assert_eq!(settings.code_style.max_line_length, 80);
    assert!((settings.performance.metrics.ttfb - 0.8).abs() < f64::EPSILON);
}
