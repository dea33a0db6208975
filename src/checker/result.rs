use serde::Serialize;

/// Bucket a check lands in when it finds a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Failed,
    Warning,
}

/// The three ordered result buckets every rule group appends to.
///
/// Entries are free-form messages: the first line is the summary, any
/// following lines list locations. Insertion order is preserved and nothing
/// is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    passed: Vec<String>,
    failed: Vec<String>,
    warnings: Vec<String>,
}

/// Borrowed view of a [`ResultSet`], the input every report formatter reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub passed: &'a [String],
    pub failed: &'a [String],
    pub warnings: &'a [String],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self, message: impl Into<String>) {
        self.passed.push(message.into());
    }

    pub fn record_fail(&mut self, message: impl Into<String>) {
        self.failed.push(message.into());
    }

    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn record(&mut self, severity: Severity, message: impl Into<String>) {
        match severity {
            Severity::Failed => self.record_fail(message),
            Severity::Warning => self.record_warning(message),
        }
    }

    /// Record exactly one entry for a check: `violation()` in the severity's
    /// bucket when `violated`, otherwise `pass` in `passed`.
    pub fn evaluate(
        &mut self,
        severity: Severity,
        violated: bool,
        pass: impl Into<String>,
        violation: impl FnOnce() -> String,
    ) {
        if violated {
            self.record(severity, violation());
        } else {
            self.record_pass(pass);
        }
    }

    #[must_use]
    pub fn passed(&self) -> &[String] {
        &self.passed
    }

    #[must_use]
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            passed: &self.passed,
            failed: &self.failed,
            warnings: &self.warnings,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            total: self.passed.len() + self.failed.len() + self.warnings.len(),
            passed: self.passed.len(),
            failed: self.failed.len(),
            warnings: self.warnings.len(),
        }
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
