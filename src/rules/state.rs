use serde_json::Value;

use crate::checker::{ResultSet, RuleGroup, ScanContext, Severity};
use crate::error::{GuidelineGuardError, Result};

const PACKAGE_MANIFEST: &str = "package.json";
const DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies"];
const GLOBAL_STATE_PACKAGES: &[&str] = &["react-redux", "@reduxjs/toolkit"];

/// Global-state policy, read from the root package manifest.
pub struct StateManagementRules;

impl RuleGroup for StateManagementRules {
    fn id(&self) -> &'static str {
        "state-management"
    }

    fn title(&self) -> &'static str {
        "State management"
    }

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet) {
        let manifest = ctx.root().join(PACKAGE_MANIFEST);
        if !manifest.is_file() {
            return;
        }

        let parsed = std::fs::read_to_string(&manifest)
            .map_err(|source| GuidelineGuardError::FileRead {
                path: manifest.clone(),
                source,
            })
            .and_then(|content| uses_global_state(&content));

        match parsed {
            Ok(redux) => results.evaluate(
                Severity::Failed,
                redux,
                "No Redux dependencies found.",
                || "Redux detected. Global state should be avoided.".to_string(),
            ),
            Err(e) => results.record_warning(format!("Error reading {PACKAGE_MANIFEST}\n{e}")),
        }
    }
}

/// True when the manifest depends on a global-state library.
///
/// # Errors
/// Returns an error if `manifest` is not valid JSON.
pub fn uses_global_state(manifest: &str) -> Result<bool> {
    let pkg: Value = serde_json::from_str(manifest)?;
    Ok(DEPENDENCY_SECTIONS
        .iter()
        .filter_map(|section| pkg.get(*section).and_then(Value::as_object))
        .any(|deps| GLOBAL_STATE_PACKAGES.iter().any(|name| deps.contains_key(*name))))
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
