use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_GUIDELINES_FAILED);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_GUIDELINES_FAILED, EXIT_CONFIG_ERROR);
}

#[test]
fn default_analyzer_covers_every_rule_group() {
    let ids: Vec<_> = checker::Analyzer::new().group_ids().collect();
    assert_eq!(
        ids,
        vec![
            "react",
            "styling",
            "accessibility",
            "code-style",
            "performance",
            "security",
            "state-management",
            "testing",
            "translations",
            "typescript",
        ]
    );
}
