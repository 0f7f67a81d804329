// Thu Oct 15 2026 - Alex

use crate::layout::{FactValue, Measurement};
use crate::table::ExpectationEntry;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Failed,
    NotApplicable,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Passed => write!(f, "passed"),
            CheckStatus::Failed => write!(f, "failed"),
            CheckStatus::NotApplicable => write!(f, "n/a"),
        }
    }
}

/// Result of checking one expectation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub entry: ExpectationEntry,
    pub status: CheckStatus,
    pub actual: Option<FactValue>,
    pub message: String,
}

impl CheckOutcome {
    /// Compares by exact equality; there is no tolerance.
    pub fn evaluate(entry: ExpectationEntry, measurement: Measurement) -> Self {
        let identifier = entry.identifier();

        match measurement {
            Measurement::Value(actual) => {
                let status = if actual == entry.expected {
                    CheckStatus::Passed
                } else {
                    CheckStatus::Failed
                };
                Self {
                    message: format!("{} == {} (expected {})", identifier, actual, entry.expected),
                    entry,
                    status,
                    actual: Some(actual),
                }
            }
            Measurement::NotApplicable => Self {
                message: format!("{} not measurable on this target (expected {})", identifier, entry.expected),
                entry,
                status: CheckStatus::NotApplicable,
                actual: None,
            },
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    pub fn failed(&self) -> bool {
        self.status == CheckStatus::Failed
    }

    pub fn section(&self) -> &'static str {
        self.entry.section()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}
