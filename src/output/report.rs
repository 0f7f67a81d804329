// Fri Oct 16 2026 - Alex

use crate::checker::{CheckOutcome, CheckRun, CheckStatus, RunSummary};
use crate::output::ReportError;
use crate::table::ConsistencyIssue;
use itertools::Itertools;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
    Json,
}

impl ReportFormat {
    /// Picks the format from a report file's extension, defaulting to text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md") | Some("markdown") => ReportFormat::Markdown,
            Some("json") => ReportFormat::Json,
            _ => ReportFormat::Text,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    suite: &'a str,
    source: &'a str,
    summary: &'a RunSummary,
    outcomes: &'a [CheckOutcome],
    issues: &'a [ConsistencyIssue],
}

pub struct ReportGenerator {
    format: ReportFormat,
    include_passed: bool,
}

impl ReportGenerator {
    pub fn new(format: ReportFormat) -> Self {
        Self { format, include_passed: true }
    }

    pub fn with_passed(mut self, include: bool) -> Self {
        self.include_passed = include;
        self
    }

    pub fn generate(&self, run: &CheckRun, issues: &[ConsistencyIssue]) -> Result<String, ReportError> {
        match self.format {
            ReportFormat::Text => Ok(self.generate_text(run, issues)),
            ReportFormat::Markdown => Ok(self.generate_markdown(run, issues)),
            ReportFormat::Json => self.generate_json(run, issues),
        }
    }

    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        run: &CheckRun,
        issues: &[ConsistencyIssue],
        path: P,
    ) -> Result<(), ReportError> {
        let report = self.generate(run, issues)?;
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(report.as_bytes())?;
        writer.flush()?;
        log::info!("Wrote report to {}", path.as_ref().display());
        Ok(())
    }

    fn listed<'a>(&self, run: &'a CheckRun) -> impl Iterator<Item = &'a CheckOutcome> {
        let include_passed = self.include_passed;
        run.outcomes.iter().filter(move |o| include_passed || !o.passed())
    }

    fn generate_text(&self, run: &CheckRun, issues: &[ConsistencyIssue]) -> String {
        let mut report = String::new();
        report.push_str("================================================================================\n");
        report.push_str(&format!("LAYOUT CHECK: {} ({})\n", run.suite, run.source));
        report.push_str("================================================================================\n");
        report.push_str(&format!("Total:          {:>8}\n", run.summary.total));
        report.push_str(&format!("Passed:         {:>8}\n", run.summary.passed));
        report.push_str(&format!("Failed:         {:>8}\n", run.summary.failed));
        report.push_str(&format!("Not applicable: {:>8}\n", run.summary.not_applicable));

        for (section, outcomes) in &self.listed(run).chunk_by(|o| o.section()) {
            report.push_str(&format!("\n[{}]\n", section));
            for outcome in outcomes {
                report.push_str(&format!("  {:<6} {}\n", status_tag(outcome.status), outcome.message));
            }
        }

        if !issues.is_empty() {
            report.push_str("\nTABLE CONSISTENCY\n");
            report.push_str("-----------------\n");
            for issue in issues {
                report.push_str(&format!("  {}\n", issue));
            }
        }

        report
    }

    fn generate_markdown(&self, run: &CheckRun, issues: &[ConsistencyIssue]) -> String {
        let mut md = String::new();
        md.push_str(&format!("# Layout check: {}\n\n", run.suite));
        md.push_str(&format!("Measured by `{}`.\n\n", run.source));
        md.push_str("| Total | Passed | Failed | Not applicable |\n");
        md.push_str("|------:|-------:|-------:|---------------:|\n");
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            run.summary.total, run.summary.passed, run.summary.failed, run.summary.not_applicable
        ));

        for (section, outcomes) in &self.listed(run).chunk_by(|o| o.section()) {
            md.push_str(&format!("\n## {}\n\n", section));
            md.push_str("| Check | Expected | Actual | Status |\n");
            md.push_str("|-------|---------:|-------:|--------|\n");
            for outcome in outcomes {
                let actual = outcome.actual.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
                md.push_str(&format!(
                    "| `{}` | {} | {} | {} |\n",
                    outcome.entry.identifier(),
                    outcome.entry.expected,
                    actual,
                    outcome.status
                ));
            }
        }

        if !issues.is_empty() {
            md.push_str("\n## Table consistency\n\n");
            for issue in issues {
                md.push_str(&format!("- **{}** ({}): {}\n", issue.section, issue.rule, issue.message));
            }
        }

        md
    }

    fn generate_json(&self, run: &CheckRun, issues: &[ConsistencyIssue]) -> Result<String, ReportError> {
        let outcomes: Vec<CheckOutcome> = self.listed(run).cloned().collect();
        let report = JsonReport {
            suite: &run.suite,
            source: &run.source,
            summary: &run.summary,
            outcomes: &outcomes,
            issues,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

fn status_tag(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Passed => "ok",
        CheckStatus::Failed => "FAIL",
        CheckStatus::NotApplicable => "n/a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::LayoutChecker;
    use crate::table::TableBuilder;

    #[allow(dead_code)]
    #[repr(C)]
    struct Pair {
        lo: u32,
        hi: u16,
    }

    fn sample_run() -> CheckRun {
        let table = TableBuilder::new("sample")
            .section("Pair", |s| {
                s.size_align::<Pair>(8, 4)
                    .field(crate::field!(Pair, u32, lo), 0, 4, 4)
                    .field(crate::field!(Pair, u16, hi), 6, 2, 2)
            })
            .build()
            .unwrap();
        LayoutChecker::compiled().run(&table)
    }

    #[test]
    fn test_text_report_groups_by_section() {
        let text = ReportGenerator::new(ReportFormat::Text).generate(&sample_run(), &[]).unwrap();
        assert!(text.contains("LAYOUT CHECK: sample (compiled)"));
        assert!(text.contains("\n[Pair]\n"));
        assert!(text.contains("FAIL   FIELD_OFFSET(Pair, hi) == 4 (expected 6)"));
    }

    #[test]
    fn test_markdown_lists_only_failures_when_asked() {
        let md = ReportGenerator::new(ReportFormat::Markdown)
            .with_passed(false)
            .generate(&sample_run(), &[])
            .unwrap();
        assert!(md.contains("## Pair"));
        assert!(md.contains("| `FIELD_OFFSET(Pair, hi)` | 6 | 4 | failed |"));
        assert!(!md.contains("sizeof(Pair)"));
    }

    #[test]
    fn test_json_report_is_structured() {
        let json = ReportGenerator::new(ReportFormat::Json).generate(&sample_run(), &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["suite"], "sample");
        assert_eq!(value["summary"]["failed"], 1);
        assert_eq!(value["outcomes"].as_array().map(|a| a.len()), Some(8));
        assert_eq!(value["outcomes"][0]["entry"]["subject"]["subject"], "type");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ReportFormat::from_path(Path::new("out.md")), ReportFormat::Markdown);
        assert_eq!(ReportFormat::from_path(Path::new("out.json")), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("out.txt")), ReportFormat::Text);
    }
}
