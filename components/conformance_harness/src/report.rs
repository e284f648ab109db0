//! Failure log and the post-run failure listing

use crate::state::Failure;
use std::fmt;
use std::io::{self, Write};

/// A failed case as recorded in the [`FailureLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureEntry {
    /// Position of the case in its suite
    pub index: usize,
    /// Description of the case
    pub description: String,
    /// Why it failed
    pub failure: Failure,
}

/// Failed cases in execution order. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureLog {
    entries: Vec<FailureEntry>,
}

impl FailureLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: FailureEntry) {
        self.entries.push(entry);
    }

    /// The entries, in execution order
    pub fn entries(&self) -> &[FailureEntry] {
        &self.entries
    }

    /// Iterate over the entries
    pub fn iter(&self) -> std::slice::Iter<'_, FailureEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The failure listing: `Failed: <description>` per entry, followed by
/// `  (<message>)` when the entry recorded a message.
impl fmt::Display for FailureLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "Failed: {}", entry.description)?;
            if let Some(message) = entry.failure.message() {
                writeln!(f, "  ({})", message)?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FailureLog {
    type Item = &'a FailureEntry;
    type IntoIter = std::slice::Iter<'a, FailureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Outcome of one run with statistics and the failure log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of cases executed
    pub total: usize,
    /// Number of cases that passed
    pub passed: usize,
    /// Number of cases that failed, faults included
    pub failed: usize,
    /// Failed cases in execution order
    pub failures: FailureLog,
}

impl RunReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub(crate) fn record_failure(&mut self, index: usize, description: &str, failure: Failure) {
        self.total += 1;
        self.failed += 1;
        self.failures.push(FailureEntry {
            index,
            description: description.to_string(),
            failure,
        });
    }

    /// Check if every executed case passed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Number of failures caused by faults rather than assertions
    pub fn fault_count(&self) -> usize {
        self.failures.iter().filter(|e| e.failure.is_fault()).count()
    }

    /// Write the failure listing.
    ///
    /// Each failed case produces `Failed: <description>`, followed by
    /// `  (<message>)` when it recorded a message. An empty log writes
    /// nothing.
    pub fn print_failed<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.failures)
    }

    /// The failure listing as a string
    pub fn render_failed(&self) -> String {
        self.failures.to_string()
    }
}
