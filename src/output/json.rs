use serde::Serialize;

use crate::checker::{ResultSet, Summary};
use crate::error::Result;

use super::{OutputFormatter, split_message};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    passed: &'a [String],
    failed: Vec<JsonEntry<'a>>,
    warnings: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    message: &'a str,
    details: Vec<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &ResultSet) -> Result<String> {
        let snapshot = results.snapshot();
        let output = JsonOutput {
            summary: results.summary(),
            passed: snapshot.passed,
            failed: snapshot.failed.iter().map(|e| convert_entry(e)).collect(),
            warnings: snapshot.warnings.iter().map(|e| convert_entry(e)).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_entry(entry: &str) -> JsonEntry<'_> {
    let (message, details) = split_message(entry);
    JsonEntry {
        message,
        details: details.into_iter().map(str::trim).collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
