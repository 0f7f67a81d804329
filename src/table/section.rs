// Thu Oct 15 2026 - Alex

use crate::layout::{FactKind, Subject};
use crate::table::ExpectationEntry;

/// Every expectation recorded for one named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSection {
    pub name: &'static str,
    /// Packing the reference definition was compiled with, kept as documentation.
    pub packing: Option<u8>,
    /// Type a pointer section dereferences to, when it names one.
    pub pointee: Option<&'static str>,
    pub entries: Vec<ExpectationEntry>,
}

/// Declared facts for one field, gathered from its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSummary {
    pub field: &'static str,
    pub offset: Option<usize>,
    pub size: Option<usize>,
    pub alignment: Option<usize>,
}

impl FieldSummary {
    pub fn end(&self) -> Option<usize> {
        Some(self.offset? + self.size?)
    }
}

impl TypeSection {
    pub fn new(name: &'static str) -> Self {
        Self { name, packing: None, pointee: None, entries: Vec::new() }
    }

    /// A section with no rows records that the layout is intentionally unchecked.
    pub fn is_documentation_only(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn type_size(&self) -> Option<usize> {
        self.expected(|s| matches!(s, Subject::Type { .. }), FactKind::TypeSize)
    }

    pub fn type_alignment(&self) -> Option<usize> {
        self.expected(|s| matches!(s, Subject::Type { .. }), FactKind::TypeAlignment)
    }

    pub fn pointee_size(&self) -> Option<usize> {
        self.expected(|s| matches!(s, Subject::Pointee { .. }), FactKind::TypeSize)
    }

    pub fn pointee_alignment(&self) -> Option<usize> {
        self.expected(|s| matches!(s, Subject::Pointee { .. }), FactKind::TypeAlignment)
    }

    pub fn field_count(&self) -> usize {
        self.fields().len()
    }

    /// Fields in declaration order with whatever facts their rows declare.
    pub fn fields(&self) -> Vec<FieldSummary> {
        let mut fields: Vec<FieldSummary> = Vec::new();

        for entry in &self.entries {
            let Some(name) = entry.subject.field() else {
                continue;
            };

            let index = match fields.iter().position(|f| f.field == name) {
                Some(index) => index,
                None => {
                    fields.push(FieldSummary { field: name, offset: None, size: None, alignment: None });
                    fields.len() - 1
                }
            };

            let value = entry.expected_bytes();
            let summary = &mut fields[index];
            match entry.kind {
                FactKind::FieldOffset => summary.offset = value,
                FactKind::TypeSize => summary.size = value,
                FactKind::FieldAlignment => summary.alignment = value,
                _ => {}
            }
        }

        fields
    }

    fn expected(&self, subject: impl Fn(&Subject) -> bool, kind: FactKind) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.kind == kind && subject(&e.subject))
            .and_then(|e| e.expected_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FactValue, Probe};

    fn row(subject: Subject, kind: FactKind, value: usize) -> ExpectationEntry {
        ExpectationEntry::new(subject, kind, FactValue::Bytes(value), Probe::size_of::<u8>())
    }

    #[test]
    fn test_field_summary_collects_rows() {
        let field = Subject::Field { owner: "RIP_INFO", field: "dwType", field_type: "DWORD" };
        let mut section = TypeSection::new("RIP_INFO");
        section.entries.push(row(Subject::Type { name: "RIP_INFO" }, FactKind::TypeSize, 8));
        section.entries.push(row(field, FactKind::TypeSize, 4));
        section.entries.push(row(field, FactKind::FieldAlignment, 4));
        section.entries.push(row(field, FactKind::FieldOffset, 4));

        assert_eq!(section.type_size(), Some(8));
        assert_eq!(section.type_alignment(), None);
        let fields = section.fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].end(), Some(8));
        assert_eq!(fields[0].alignment, Some(4));
    }

    #[test]
    fn test_empty_section_is_documentation_only() {
        let section = TypeSection::new("PAPCFUNC");
        assert!(section.is_documentation_only());
        assert_eq!(section.field_count(), 0);
    }
}
