// Thu Oct 15 2026 - Alex

use crate::checker::{CheckOutcome, CheckRun};
use crate::layout::{CompiledLayout, LayoutSource, Measurement};
use crate::table::{ExpectationEntry, ExpectationTable};
use crate::utils::logging::ScopedTimer;
use rayon::prelude::*;
use regex::Regex;
use std::sync::Arc;

/// Measures every selected table entry through a [`LayoutSource`] and compares.
///
/// A mismatch never stops the pass; every selected entry yields exactly one outcome.
pub struct LayoutChecker {
    source: Arc<dyn LayoutSource>,
    filter: Option<Regex>,
}

impl LayoutChecker {
    pub fn new(source: Arc<dyn LayoutSource>) -> Self {
        Self { source, filter: None }
    }

    /// Checks against the definitions compiled into this binary.
    pub fn compiled() -> Self {
        Self::new(Arc::new(CompiledLayout::default()))
    }

    /// Restricts the pass to sections whose type name matches `filter`.
    pub fn with_filter(mut self, filter: Regex) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Measures one entry. Kinds the source does not declare a capability for
    /// are not applicable, whatever `measure` would return.
    pub fn check(&self, entry: &ExpectationEntry) -> CheckOutcome {
        let measurement = match entry.kind.required_capability() {
            Some(required) if !self.source.capabilities().contains(required) => Measurement::NotApplicable,
            _ => self.source.measure(entry.kind, &entry.probe),
        };
        let outcome = CheckOutcome::evaluate(*entry, measurement);
        if outcome.failed() {
            log::debug!("{}", outcome.message);
        }
        outcome
    }

    /// Lazily checks the selected entries in table order. Calling it again
    /// measures again.
    pub fn outcomes<'a>(&'a self, table: &'a ExpectationTable) -> impl Iterator<Item = CheckOutcome> + 'a {
        self.selected(table).map(move |entry| self.check(entry))
    }

    pub fn run(&self, table: &ExpectationTable) -> CheckRun {
        let _timer = ScopedTimer::new(&format!("check {}", table.name()));
        let outcomes: Vec<CheckOutcome> = self.outcomes(table).collect();
        self.finish(table, outcomes)
    }

    /// Same outcomes in the same order as [`run`](Self::run), measured on a
    /// rayon pool of `threads` workers.
    pub fn run_parallel(&self, table: &ExpectationTable, threads: usize) -> CheckRun {
        let _timer = ScopedTimer::new(&format!("check {} on {} threads", table.name(), threads));

        let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool,
            Err(e) => {
                log::warn!("Falling back to sequential check: {}", e);
                return self.run(table);
            }
        };

        let entries: Vec<&ExpectationEntry> = self.selected(table).collect();
        let outcomes: Vec<CheckOutcome> = pool.install(|| entries.par_iter().map(|entry| self.check(entry)).collect());
        self.finish(table, outcomes)
    }

    fn selected<'a>(&'a self, table: &'a ExpectationTable) -> impl Iterator<Item = &'a ExpectationEntry> + 'a {
        table
            .sections()
            .filter(move |section| self.filter.as_ref().map_or(true, |re| re.is_match(section.name)))
            .flat_map(|section| section.entries.iter())
    }

    fn finish(&self, table: &ExpectationTable, outcomes: Vec<CheckOutcome>) -> CheckRun {
        let run = CheckRun::new(table.name(), self.source.name(), outcomes);
        log::info!(
            "{}: {} checks, {} passed, {} failed, {} not applicable",
            run.suite,
            run.summary.total,
            run.summary.passed,
            run.summary.failed,
            run.summary.not_applicable
        );
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::CheckStatus;
    use crate::layout::{Capabilities, FactKind, FactValue, Probe};
    use crate::table::TableBuilder;
    use crate::win32::Ptr32;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[allow(dead_code)]
    #[repr(C)]
    struct Matching {
        a: u32,
        b: u16,
        c: u16,
    }

    #[allow(dead_code)]
    #[repr(C)]
    struct Shifted {
        a: u32,
        b: u16,
        extra: u16,
        c: u16,
    }

    #[allow(dead_code)]
    #[repr(C)]
    struct Eight {
        lo: u32,
        hi: u32,
    }

    fn matching_table() -> ExpectationTable {
        TableBuilder::new("scenario")
            .section("Matching", |s| {
                s.alignment::<Matching>(4)
                    .field_offset(crate::field!(Matching, u32, a), 0)
                    .field_offset(crate::field!(Matching, u16, b), 4)
                    .field_offset(crate::field!(Matching, u16, c), 6)
            })
            .build()
            .unwrap()
    }

    struct CountingSource {
        inner: CompiledLayout,
        calls: AtomicUsize,
    }

    impl LayoutSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
        }

        fn capabilities(&self) -> Capabilities {
            self.inner.capabilities()
        }

        fn measure(&self, kind: FactKind, probe: &Probe) -> Measurement {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.measure(kind, probe)
        }
    }

    #[test]
    fn test_matching_definition_passes_everything() {
        let run = LayoutChecker::compiled().run(&matching_table());
        assert_eq!(run.summary.total, 4);
        assert_eq!(run.summary.passed, 4);
        assert_eq!(run.summary.failed, 0);
        assert!(run.is_success());
    }

    #[test]
    fn test_shifted_field_fails_alone() {
        let table = TableBuilder::new("scenario")
            .section("Shifted", |s| {
                s.alignment::<Shifted>(4)
                    .field_offset(crate::field!(Shifted, u32, a), 0)
                    .field_offset(crate::field!(Shifted, u16, b), 4)
                    .field_offset(crate::field!(Shifted, u16, c), 6)
            })
            .build()
            .unwrap();

        let run = LayoutChecker::compiled().run(&table);
        assert_eq!(run.summary.passed, 3);
        assert_eq!(run.summary.failed, 1);

        let failures: Vec<_> = run.failures().map(|o| o.message.as_str()).collect();
        assert_eq!(failures, vec!["FIELD_OFFSET(Shifted, c) == 8 (expected 6)"]);
    }

    #[test]
    fn test_pointer_and_pointee_pass_independently() {
        let table = TableBuilder::new("scenario")
            .section("PEight", |s| s.pointer::<Ptr32<Eight>>(4, 4).pointee::<Ptr32<Eight>>("Eight", 8, 4))
            .build()
            .unwrap();

        let run = LayoutChecker::compiled().run(&table);
        assert_eq!(run.summary.passed, 4);
        let messages: Vec<_> = run.outcomes.iter().map(|o| o.message.as_str()).collect();
        assert!(messages.contains(&"sizeof(PEight) == 4 (expected 4)"));
        assert!(messages.contains(&"sizeof(*PEight) == 8 (expected 8)"));
    }

    #[test]
    fn test_runs_are_deterministic() {
        let table = matching_table();
        let checker = LayoutChecker::compiled();
        let first: Vec<_> = checker.outcomes(&table).collect();
        let second: Vec<_> = checker.outcomes(&table).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_outcomes_are_measured_lazily() {
        let source = Arc::new(CountingSource { inner: CompiledLayout::default(), calls: AtomicUsize::new(0) });
        let checker = LayoutChecker::new(source.clone());
        let table = matching_table();

        let mut outcomes = checker.outcomes(&table);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        outcomes.next();
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcomes.count(), 3);
        assert_eq!(source.calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_parallel_run_matches_sequential() {
        let table = crate::reference::kernel32_table().unwrap();
        let checker = LayoutChecker::compiled();
        let sequential = checker.run(&table);
        let parallel = checker.run_parallel(&table, 4);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_filter_selects_sections() {
        let table = crate::reference::kernel32_table().unwrap();
        let checker = LayoutChecker::compiled().with_filter(Regex::new("^OVERLAPPED$").unwrap());
        let run = checker.run(&table);
        assert_eq!(run.summary.total, 17);
        assert!(run.outcomes.iter().all(|o| o.section() == "OVERLAPPED"));
    }

    #[test]
    fn test_missing_alignment_capability_skips_alignment_rows() {
        let source = CompiledLayout::new().with_capabilities(Capabilities::TYPE_ALIGNMENT);
        let run = LayoutChecker::new(Arc::new(source)).run(&matching_table());
        assert_eq!(run.summary.not_applicable, 0);

        let source = CompiledLayout::new().with_capabilities(Capabilities::empty());
        let run = LayoutChecker::new(Arc::new(source)).run(&matching_table());
        assert_eq!(run.summary.not_applicable, 1);
        assert_eq!(run.summary.passed, 3);
        assert_eq!(run.outcomes[0].status, CheckStatus::NotApplicable);
    }

    struct UndeclaredAlignmentSource;

    impl LayoutSource for UndeclaredAlignmentSource {
        fn name(&self) -> &str {
            "undeclared"
        }

        fn capabilities(&self) -> Capabilities {
            Capabilities::empty()
        }

        fn measure(&self, _kind: FactKind, probe: &Probe) -> Measurement {
            Measurement::Value(probe.measure())
        }
    }

    #[test]
    fn test_undeclared_capability_is_not_applicable_for_any_source() {
        let table = TableBuilder::new("scenario")
            .section("DWORD", |s| s.alignment::<u32>(4).size::<u32>(4))
            .build()
            .unwrap();

        let run = LayoutChecker::new(Arc::new(UndeclaredAlignmentSource)).run(&table);
        assert_eq!(run.outcomes[0].status, CheckStatus::NotApplicable);
        assert_eq!(run.outcomes[0].actual, None);
        assert_eq!(run.outcomes[1].status, CheckStatus::Passed);
        assert_eq!(run.outcomes[1].actual, Some(FactValue::Bytes(4)));
        assert_eq!(run.summary.not_applicable, 1);
    }
}
