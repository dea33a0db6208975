use indexmap::IndexMap;

/// Longest excerpt kept per flagged line, in characters.
pub const MAX_EXCERPT_CHARS: usize = 100;

/// Accumulated hits for one check: a total count plus the files that
/// contributed, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Finding {
    count: usize,
    locations: IndexMap<String, Location>,
}

/// Everything recorded against one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub occurrences: usize,
    pub lines: Vec<LineHit>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHit {
    /// 1-based line number.
    pub number: usize,
    pub excerpt: String,
}

/// How the location list under a finding's headline is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStyle {
    /// `path`
    Plain,
    /// `  - path`
    Bulleted,
    /// `  path (N noun)`
    Counted(&'static str),
    /// `  path:` followed by `    Lines: 3, 7`
    Lines,
    /// `  path (N lines)` followed by one `    line N: excerpt` per hit
    Excerpts,
    /// `  - path (note)`
    Noted,
}

impl Finding {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `occurrences` hits in `file`. Zero is a no-op.
    pub fn record(&mut self, file: &str, occurrences: usize) {
        if occurrences == 0 {
            return;
        }
        self.count += occurrences;
        self.location(file).occurrences += occurrences;
    }

    /// Add one hit at a specific line of `file`.
    pub fn record_line(&mut self, file: &str, number: usize, excerpt: &str) {
        self.count += 1;
        let location = self.location(file);
        location.occurrences += 1;
        location.lines.push(LineHit {
            number,
            excerpt: truncate(excerpt.trim()),
        });
    }

    /// Add one hit in `file` carrying a short explanation.
    pub fn record_note(&mut self, file: &str, note: impl Into<String>) {
        self.count += 1;
        let location = self.location(file);
        location.occurrences += 1;
        location.note = Some(note.into());
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn locations(&self) -> impl Iterator<Item = (&str, &Location)> {
        self.locations.iter().map(|(file, loc)| (file.as_str(), loc))
    }

    /// Headline followed by one block per file, newline separated.
    #[must_use]
    pub fn render(&self, headline: &str, style: LocationStyle) -> String {
        let mut lines = vec![headline.to_string()];
        for (file, loc) in &self.locations {
            match style {
                LocationStyle::Plain => lines.push(file.clone()),
                LocationStyle::Bulleted => lines.push(format!("  - {file}")),
                LocationStyle::Counted(noun) => {
                    lines.push(format!("  {file} ({} {noun})", loc.occurrences));
                }
                LocationStyle::Lines => {
                    let numbers: Vec<String> =
                        loc.lines.iter().map(|hit| hit.number.to_string()).collect();
                    lines.push(format!("  {file}:"));
                    lines.push(format!("    Lines: {}", numbers.join(", ")));
                }
                LocationStyle::Excerpts => {
                    lines.push(format!("  {file} ({} lines)", loc.lines.len()));
                    for hit in &loc.lines {
                        lines.push(format!("    line {}: {}", hit.number, hit.excerpt));
                    }
                }
                LocationStyle::Noted => match &loc.note {
                    Some(note) => lines.push(format!("  - {file} ({note})")),
                    None => lines.push(format!("  - {file}")),
                },
            }
        }
        lines.join("\n")
    }

    fn location(&mut self, file: &str) -> &mut Location {
        self.locations.entry(file.to_string()).or_default()
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_EXCERPT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
    format!("{cut}...")
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
