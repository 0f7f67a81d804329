// Thu Oct 15 2026 - Alex

use crate::layout::Alignment;
use crate::table::{ExpectationTable, TypeSection};
use regex::Regex;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyRule {
    TailPadding,
    FieldAlignment,
    PointeeAgreement,
    InvalidAlignment,
    PackingExceeded,
}

impl fmt::Display for ConsistencyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConsistencyRule::TailPadding => "tail-padding",
            ConsistencyRule::FieldAlignment => "field-alignment",
            ConsistencyRule::PointeeAgreement => "pointee-agreement",
            ConsistencyRule::InvalidAlignment => "invalid-alignment",
            ConsistencyRule::PackingExceeded => "packing-exceeded",
        };
        f.write_str(name)
    }
}

/// A recorded expectation that contradicts another one in the same table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyIssue {
    pub section: &'static str,
    pub rule: ConsistencyRule,
    pub message: String,
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.section, self.rule, self.message)
    }
}

pub trait SectionRule: Send + Sync {
    fn rule(&self) -> ConsistencyRule;
    fn check(&self, section: &TypeSection, table: &ExpectationTable) -> Vec<ConsistencyIssue>;
}

/// Cross-checks the reference data against itself; never measures anything.
pub struct ConsistencyChecker {
    rules: Vec<Box<dyn SectionRule>>,
    filter: Option<Regex>,
}

impl ConsistencyChecker {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(InvalidAlignmentRule),
                Box::new(TailPaddingRule),
                Box::new(FieldAlignmentRule),
                Box::new(PackingRule),
                Box::new(PointeeAgreementRule),
            ],
            filter: None,
        }
    }

    /// Only cross-checks sections whose type name matches `filter`. Other
    /// sections are still visible to rules that look up a referenced section.
    pub fn with_filter(mut self, filter: Regex) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn add_rule(mut self, rule: Box<dyn SectionRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn check(&self, table: &ExpectationTable) -> Vec<ConsistencyIssue> {
        let issues: Vec<ConsistencyIssue> = table
            .sections()
            .filter(|section| self.filter.as_ref().map_or(true, |re| re.is_match(section.name)))
            .flat_map(|section| self.rules.iter().flat_map(move |rule| rule.check(section, table)))
            .collect();

        if !issues.is_empty() {
            log::warn!("Table {} has {} consistency issues", table.name(), issues.len());
        }
        issues
    }
}

impl Default for ConsistencyChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn issue(section: &TypeSection, rule: ConsistencyRule, message: String) -> ConsistencyIssue {
    ConsistencyIssue { section: section.name, rule, message }
}

struct InvalidAlignmentRule;

impl SectionRule for InvalidAlignmentRule {
    fn rule(&self) -> ConsistencyRule {
        ConsistencyRule::InvalidAlignment
    }

    fn check(&self, section: &TypeSection, _table: &ExpectationTable) -> Vec<ConsistencyIssue> {
        let declared = section
            .entries
            .iter()
            .filter(|e| e.kind.is_alignment())
            .filter_map(|e| e.expected_bytes().map(|value| (e.identifier(), value)));

        declared
            .filter(|(_, value)| Alignment::new(*value).is_none())
            .map(|(identifier, value)| {
                issue(section, self.rule(), format!("{} expects {}, not a power of two", identifier, value))
            })
            .collect()
    }
}

/// The furthest-reaching declared field, rounded up to the type alignment,
/// must land exactly on the declared size.
struct TailPaddingRule;

impl SectionRule for TailPaddingRule {
    fn rule(&self) -> ConsistencyRule {
        ConsistencyRule::TailPadding
    }

    fn check(&self, section: &TypeSection, _table: &ExpectationTable) -> Vec<ConsistencyIssue> {
        let (Some(size), Some(alignment)) = (section.type_size(), section.type_alignment()) else {
            return Vec::new();
        };
        let Some(alignment) = Alignment::new(alignment) else {
            return Vec::new();
        };
        let Some(last) = section.fields().into_iter().filter(|f| f.end().is_some()).max_by_key(|f| f.end()) else {
            return Vec::new();
        };

        let end = last.end().unwrap_or(0);
        let padded = alignment.align(end);
        if padded == size {
            return Vec::new();
        }

        vec![issue(
            section,
            self.rule(),
            format!(
                "{} ends at {}, padded to {} gives {} but sizeof is {}",
                last.field, end, alignment, padded, size
            ),
        )]
    }
}

struct FieldAlignmentRule;

impl SectionRule for FieldAlignmentRule {
    fn rule(&self) -> ConsistencyRule {
        ConsistencyRule::FieldAlignment
    }

    fn check(&self, section: &TypeSection, _table: &ExpectationTable) -> Vec<ConsistencyIssue> {
        section
            .fields()
            .into_iter()
            .filter_map(|field| {
                let offset = field.offset?;
                let alignment = Alignment::new(field.alignment?)?;
                (!alignment.is_aligned(offset)).then(|| {
                    issue(
                        section,
                        self.rule(),
                        format!("{} at offset {} is not a multiple of its alignment {}", field.field, offset, alignment),
                    )
                })
            })
            .collect()
    }
}

/// No alignment inside a packed section may exceed the packing.
struct PackingRule;

impl SectionRule for PackingRule {
    fn rule(&self) -> ConsistencyRule {
        ConsistencyRule::PackingExceeded
    }

    fn check(&self, section: &TypeSection, _table: &ExpectationTable) -> Vec<ConsistencyIssue> {
        let Some(packing) = section.packing.map(usize::from) else {
            return Vec::new();
        };

        let mut issues = Vec::new();
        if let Some(alignment) = section.type_alignment().filter(|a| *a > packing) {
            issues.push(issue(
                section,
                self.rule(),
                format!("type alignment {} exceeds pack {}", alignment, packing),
            ));
        }
        for field in section.fields() {
            if let Some(alignment) = field.alignment.filter(|a| *a > packing) {
                issues.push(issue(
                    section,
                    self.rule(),
                    format!("{} alignment {} exceeds pack {}", field.field, alignment, packing),
                ));
            }
        }
        issues
    }
}

/// A pointee expectation must repeat what the pointee's own section records.
struct PointeeAgreementRule;

impl SectionRule for PointeeAgreementRule {
    fn rule(&self) -> ConsistencyRule {
        ConsistencyRule::PointeeAgreement
    }

    fn check(&self, section: &TypeSection, table: &ExpectationTable) -> Vec<ConsistencyIssue> {
        let Some(target) = section.pointee.and_then(|name| table.section(name)) else {
            return Vec::new();
        };

        let pairs = [
            ("size", section.pointee_size(), target.type_size()),
            ("alignment", section.pointee_alignment(), target.type_alignment()),
        ];

        pairs
            .into_iter()
            .filter_map(|(what, pointee, own)| match (pointee, own) {
                (Some(pointee), Some(own)) if pointee != own => Some(issue(
                    section,
                    self.rule(),
                    format!("pointee {} {} disagrees with {} {}", what, pointee, target.name, own),
                )),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableBuilder;

    #[allow(dead_code)]
    #[repr(C)]
    struct Header {
        tag: u32,
        len: u16,
    }

    #[test]
    fn test_consistent_table_has_no_issues() {
        let table = TableBuilder::new("sample")
            .section("Header", |s| {
                s.packing(4)
                    .size_align::<Header>(8, 4)
                    .field(crate::field!(Header, u32, tag), 0, 4, 4)
                    .field(crate::field!(Header, u16, len), 4, 2, 2)
            })
            .section("PHeader", |s| s.pointee::<*const Header>("Header", 8, 4))
            .build()
            .unwrap();

        assert!(ConsistencyChecker::new().check(&table).is_empty());
    }

    #[test]
    fn test_tail_padding_mismatch() {
        let table = TableBuilder::new("sample")
            .section("Header", |s| {
                s.size_align::<Header>(12, 4).field(crate::field!(Header, u16, len), 4, 2, 2)
            })
            .build()
            .unwrap();

        let issues = ConsistencyChecker::new().check(&table);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, ConsistencyRule::TailPadding);
        assert_eq!(issues[0].message, "len ends at 6, padded to 4 gives 8 but sizeof is 12");
    }

    #[test]
    fn test_misaligned_offset_and_packing() {
        let table = TableBuilder::new("sample")
            .section("Header", |s| s.packing(2).field(crate::field!(Header, u32, tag), 2, 4, 4))
            .build()
            .unwrap();

        let rules: Vec<_> = ConsistencyChecker::new().check(&table).into_iter().map(|i| i.rule).collect();
        assert_eq!(rules, vec![ConsistencyRule::FieldAlignment, ConsistencyRule::PackingExceeded]);
    }

    #[test]
    fn test_pointee_disagreement_and_bad_alignment() {
        let table = TableBuilder::new("sample")
            .section("Header", |s| s.size_align::<Header>(8, 4))
            .section("PHeader", |s| s.pointee::<*const Header>("Header", 8, 3))
            .build()
            .unwrap();

        let issues = ConsistencyChecker::new().check(&table);
        let rules: Vec<_> = issues.iter().map(|i| i.rule).collect();
        assert_eq!(rules, vec![ConsistencyRule::InvalidAlignment, ConsistencyRule::PointeeAgreement]);
        assert!(issues.iter().all(|i| i.section == "PHeader"));
    }

    #[test]
    fn test_tail_rule_uses_furthest_field_end() {
        let table = TableBuilder::new("sample")
            .section("Header", |s| {
                s.size_align::<Header>(8, 4)
                    .field(crate::field!(Header, u32, tag), 0, 12, 4)
                    .field(crate::field!(Header, u16, len), 4, 2, 2)
            })
            .build()
            .unwrap();

        let issues = ConsistencyChecker::new().check(&table);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, ConsistencyRule::TailPadding);
        assert_eq!(issues[0].message, "tag ends at 12, padded to 4 gives 12 but sizeof is 8");
    }

    #[test]
    fn test_filter_limits_checked_sections() {
        let table = TableBuilder::new("sample")
            .section("Header", |s| s.size_align::<Header>(8, 4))
            .section("PHeader", |s| s.pointee::<*const Header>("Header", 16, 4))
            .build()
            .unwrap();

        assert_eq!(ConsistencyChecker::new().check(&table).len(), 1);

        let filtered = ConsistencyChecker::new().with_filter(Regex::new("^Header$").unwrap());
        assert!(filtered.check(&table).is_empty());

        let pointer_only = ConsistencyChecker::new().with_filter(Regex::new("^PHeader$").unwrap());
        let issues = pointer_only.check(&table);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, ConsistencyRule::PointeeAgreement);
    }
}
