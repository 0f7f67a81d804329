// Fri Oct 16 2026 - Alex

use crate::checker::{CheckRun, CheckStatus};
use crate::table::ConsistencyIssue;
use colored::*;
use std::io::{self, Write};

/// Writes one line per reported outcome followed by a summary line.
pub struct TestReporter {
    report_success: bool,
    use_color: bool,
}

impl TestReporter {
    pub fn new() -> Self {
        Self { report_success: false, use_color: true }
    }

    pub fn with_success_lines(mut self, report_success: bool) -> Self {
        self.report_success = report_success;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn report<W: Write>(&self, run: &CheckRun, out: &mut W) -> io::Result<()> {
        for outcome in &run.outcomes {
            let line = match outcome.status {
                CheckStatus::Failed => {
                    self.paint(format!("{}: Test failed: {}", run.suite, outcome.message), Color::Red)
                }
                CheckStatus::NotApplicable => {
                    self.paint(format!("{}: Test skipped: {}", run.suite, outcome.message), Color::Yellow)
                }
                CheckStatus::Passed if self.report_success => {
                    self.paint(format!("{}: Test succeeded: {}", run.suite, outcome.message), Color::Green)
                }
                CheckStatus::Passed => continue,
            };
            writeln!(out, "{}", line)?;
        }

        writeln!(out, "{}", self.summary_line(run))
    }

    pub fn summary_line(&self, run: &CheckRun) -> String {
        let line = format!(
            "{}: {} tests executed ({} failures), {} skipped.",
            run.suite,
            run.summary.executed(),
            run.summary.failed,
            run.summary.not_applicable
        );
        if run.is_success() {
            line
        } else {
            self.paint(line, Color::Red)
        }
    }

    pub fn report_issues<W: Write>(&self, suite: &str, issues: &[ConsistencyIssue], out: &mut W) -> io::Result<()> {
        for issue in issues {
            writeln!(out, "{}", self.paint(format!("{}: Table inconsistent: {}", suite, issue), Color::Red))?;
        }
        Ok(())
    }

    fn paint(&self, line: String, color: Color) -> String {
        if self.use_color {
            line.color(color).to_string()
        } else {
            line
        }
    }
}

impl Default for TestReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::CheckOutcome;
    use crate::layout::{FactKind, FactValue, Measurement, Probe, Subject};
    use crate::table::{ConsistencyRule, ExpectationEntry};

    fn sample_run() -> CheckRun {
        let entry = ExpectationEntry::new(
            Subject::Field { owner: "T", field: "c", field_type: "WORD" },
            FactKind::FieldOffset,
            FactValue::Bytes(6),
            Probe::Bytes(|| 6),
        );
        let alignment = ExpectationEntry::new(
            Subject::Type { name: "T" },
            FactKind::TypeAlignment,
            FactValue::Bytes(4),
            Probe::align_of::<u32>(),
        );
        CheckRun::new(
            "kernel32",
            "compiled",
            vec![
                CheckOutcome::evaluate(entry, Measurement::Value(FactValue::Bytes(6))),
                CheckOutcome::evaluate(entry, Measurement::Value(FactValue::Bytes(8))),
                CheckOutcome::evaluate(alignment, Measurement::NotApplicable),
            ],
        )
    }

    fn render(reporter: &TestReporter, run: &CheckRun) -> String {
        let mut out = Vec::new();
        reporter.report(run, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_failures_and_skips_are_reported() {
        let text = render(&TestReporter::new().with_color(false), &sample_run());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "kernel32: Test failed: FIELD_OFFSET(T, c) == 8 (expected 6)",
                "kernel32: Test skipped: TYPE_ALIGNMENT(T) not measurable on this target (expected 4)",
                "kernel32: 2 tests executed (1 failures), 1 skipped.",
            ]
        );
    }

    #[test]
    fn test_success_lines_on_request() {
        let reporter = TestReporter::new().with_color(false).with_success_lines(true);
        let text = render(&reporter, &sample_run());
        assert!(text.starts_with("kernel32: Test succeeded: FIELD_OFFSET(T, c) == 6 (expected 6)\n"));
    }

    #[test]
    fn test_issue_lines() {
        let issues = vec![ConsistencyIssue {
            section: "COMSTAT",
            rule: ConsistencyRule::TailPadding,
            message: "cbOutQue ends at 12, padded to 4 gives 12 but sizeof is 16".to_string(),
        }];
        let mut out = Vec::new();
        TestReporter::new().with_color(false).report_issues("kernel32", &issues, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "kernel32: Table inconsistent: COMSTAT [tail-padding]: cbOutQue ends at 12, padded to 4 gives 12 but sizeof is 16\n"
        );
    }
}
