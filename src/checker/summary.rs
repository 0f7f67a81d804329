// Thu Oct 15 2026 - Alex

use crate::checker::{CheckOutcome, CheckStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub not_applicable: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[CheckOutcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut summary, outcome| {
            summary.total += 1;
            match outcome.status {
                CheckStatus::Passed => summary.passed += 1,
                CheckStatus::Failed => summary.failed += 1,
                CheckStatus::NotApplicable => summary.not_applicable += 1,
            }
            summary
        })
    }

    /// Tests that actually ran, not-applicable ones excluded.
    pub fn executed(&self) -> usize {
        self.total - self.not_applicable
    }
}

/// Every outcome of one checker pass over a table, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRun {
    pub suite: String,
    pub source: String,
    pub outcomes: Vec<CheckOutcome>,
    pub summary: RunSummary,
}

impl CheckRun {
    pub fn new(suite: &str, source: &str, outcomes: Vec<CheckOutcome>) -> Self {
        let summary = RunSummary::from_outcomes(&outcomes);
        Self { suite: suite.to_string(), source: source.to_string(), outcomes, summary }
    }

    pub fn is_success(&self) -> bool {
        self.summary.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FactKind, FactValue, Measurement, Probe, Subject};
    use crate::table::ExpectationEntry;

    #[test]
    fn test_summary_counts_each_status() {
        let entry = ExpectationEntry::new(
            Subject::Type { name: "WORD" },
            FactKind::TypeSize,
            FactValue::Bytes(2),
            Probe::size_of::<u16>(),
        );
        let outcomes = vec![
            CheckOutcome::evaluate(entry, Measurement::Value(FactValue::Bytes(2))),
            CheckOutcome::evaluate(entry, Measurement::Value(FactValue::Bytes(4))),
            CheckOutcome::evaluate(entry, Measurement::NotApplicable),
        ];

        let run = CheckRun::new("windef", "compiled", outcomes);
        assert_eq!(run.summary, RunSummary { total: 3, passed: 1, failed: 1, not_applicable: 1 });
        assert_eq!(run.summary.executed(), 2);
        assert!(!run.is_success());
        assert_eq!(run.failures().count(), 1);
    }
}
