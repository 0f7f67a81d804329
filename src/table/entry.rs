// Thu Oct 15 2026 - Alex

use crate::layout::{FactKind, FactValue, Probe, Subject};
use serde::Serialize;

/// One expected fact: what it is about, which kind, the recorded value, and
/// how to measure it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExpectationEntry {
    pub subject: Subject,
    pub kind: FactKind,
    pub expected: FactValue,
    #[serde(skip)]
    pub probe: Probe,
}

impl ExpectationEntry {
    pub fn new(subject: Subject, kind: FactKind, expected: FactValue, probe: Probe) -> Self {
        Self { subject, kind, expected, probe }
    }

    pub fn section(&self) -> &'static str {
        self.subject.section()
    }

    /// Greppable designator such as `FIELD_OFFSET(OVERLAPPED, hEvent)` or `sizeof(*LPCOMSTAT)`.
    pub fn identifier(&self) -> String {
        format!("{}({})", self.kind, self.subject)
    }

    pub fn expected_bytes(&self) -> Option<usize> {
        self.expected.as_bytes()
    }
}

impl PartialEq for ExpectationEntry {
    fn eq(&self, other: &Self) -> bool {
        self.subject == other.subject && self.kind == other.kind && self.expected == other.expected
    }
}

impl Eq for ExpectationEntry {}
