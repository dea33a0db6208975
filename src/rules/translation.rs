use std::cmp::Ordering;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::{Map, Value};

use crate::checker::{Finding, LocationStyle, ResultSet, RuleGroup, ScanContext, Severity};
use crate::error::Result;
use crate::scanner::SourceFile;

use super::REACT_SOURCES;

static TEMPLATE_TRANSLATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`.*t\(.*\).*`").expect("Invalid regex"));

const COUNT_PLACEHOLDER: &str = "{{count}}";
const PLURAL_SUFFIX: &str = "_plural";
const TRANSLATIONS_DIR: &str = "translations";
const WEB_RESOURCE_NAME: &str = "web.json";

/// Translation resource hygiene and interpolation in components.
pub struct TranslationRules;

#[derive(Default)]
struct TranslationScan {
    unsorted: Finding,
    plural_keys: IndexMap<String, Vec<String>>,
    concatenations: Finding,
}

impl RuleGroup for TranslationRules {
    fn id(&self) -> &'static str {
        "translations"
    }

    fn title(&self) -> &'static str {
        "Translations"
    }

    fn run(&self, ctx: &ScanContext<'_>, results: &mut ResultSet) {
        let mut scan = TranslationScan::default();
        ctx.walker.walk(|file| {
            if is_translation_resource(file) {
                match load_resource(file) {
                    Ok(resource) => scan.inspect_resource(&file.relative, &resource),
                    Err(e) => results.record_warning(format!(
                        "Error reading translation file: {}\n{e}",
                        file.relative
                    )),
                }
            }
            if file.has_suffix(REACT_SOURCES)
                && let Some(content) = file.read()
            {
                scan.concatenations.record(
                    &file.relative,
                    TEMPLATE_TRANSLATION_RE.find_iter(&content).count(),
                );
            }
        });
        scan.report(results);
    }
}

impl TranslationScan {
    fn inspect_resource(&mut self, file: &str, resource: &Value) {
        let Some(root) = resource.as_object() else {
            return;
        };
        if !keys_sorted(root) {
            self.unsorted.record(file, 1);
        }
        let mut keys = Vec::new();
        collect_plural_violations(root, "", &mut keys);
        if !keys.is_empty() {
            self.plural_keys.insert(file.to_string(), keys);
        }
    }

    fn report(&self, results: &mut ResultSet) {
        results.evaluate(
            Severity::Warning,
            !self.unsorted.is_empty(),
            "All translation files are sorted alphabetically.",
            || {
                self.unsorted.render(
                    "Translation files are not sorted alphabetically:",
                    LocationStyle::Bulleted,
                )
            },
        );

        results.evaluate(
            Severity::Warning,
            !self.plural_keys.is_empty(),
            "Plural keys follow the `_plural` convention.",
            || {
                let mut lines = vec![format!(
                    "Keys with '{COUNT_PLACEHOLDER}' must end in '{PLURAL_SUFFIX}':"
                )];
                for (file, keys) in &self.plural_keys {
                    lines.push(format!("  {file}:"));
                    lines.push(format!("    Keys: {}", keys.join(", ")));
                }
                lines.join("\n")
            },
        );

        let concatenations = &self.concatenations;
        results.evaluate(
            Severity::Warning,
            !concatenations.is_empty(),
            "No translation string concatenation detected.",
            || {
                concatenations.render(
                    &format!(
                        "Found {} translation concatenations. Use interpolation.",
                        concatenations.count()
                    ),
                    LocationStyle::Plain,
                )
            },
        );
    }
}

/// JSON files under a `translations` directory, or named `web.json`.
fn is_translation_resource(file: &SourceFile) -> bool {
    file.has_suffix(&[".json"])
        && (file.in_directory(TRANSLATIONS_DIR) || file.file_name() == WEB_RESOURCE_NAME)
}

fn load_resource(file: &SourceFile) -> Result<Value> {
    let content = std::fs::read_to_string(&file.path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Case-insensitive order. Keys that differ only by case put lowercase first.
#[must_use]
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// True when this object and every nested object list keys in order.
#[must_use]
pub fn keys_sorted(object: &Map<String, Value>) -> bool {
    let keys: Vec<&String> = object.keys().collect();
    let in_order = keys
        .windows(2)
        .all(|pair| compare_keys(pair[0], pair[1]) != Ordering::Greater);
    in_order
        && object
            .values()
            .filter_map(Value::as_object)
            .all(keys_sorted)
}

/// Dotted paths of string values that interpolate a count under a key
/// without the plural suffix.
pub fn collect_plural_violations(
    object: &Map<String, Value>,
    prefix: &str,
    out: &mut Vec<String>,
) {
    for (key, value) in object {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::String(text)
                if text.contains(COUNT_PLACEHOLDER) && !key.ends_with(PLURAL_SUFFIX) =>
            {
                out.push(path);
            }
            Value::Object(nested) => collect_plural_violations(nested, &path, out),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "translation_tests.rs"]
mod tests;
