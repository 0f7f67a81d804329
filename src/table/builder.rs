// Thu Oct 15 2026 - Alex

use crate::layout::{FactKind, FactValue, FieldProbe, Integral, Pointer, Probe, Signedness, Subject};
use crate::table::{ExpectationEntry, ExpectationTable, TableError, TypeSection};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Assembles an [`ExpectationTable`] one section at a time.
///
/// ```ignore
/// let table = TableBuilder::new("kernel32")
///     .section("OVERLAPPED", |s| {
///         s.packing(4)
///             .size_align::<OVERLAPPED>(20, 4)
///             .field(field!(OVERLAPPED, HANDLE, hEvent), 16, 4, 4)
///     })
///     .opaque("PAPCFUNC")
///     .build()?;
/// ```
pub struct TableBuilder {
    name: String,
    sections: Vec<TypeSection>,
}

impl TableBuilder {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), sections: Vec::new() }
    }

    pub fn section<F>(mut self, name: &'static str, build: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        self.sections.push(build(SectionBuilder::new(name)).finish());
        self
    }

    /// Records a type whose layout is deliberately not verified.
    pub fn opaque(mut self, name: &'static str) -> Self {
        self.sections.push(TypeSection::new(name));
        self
    }

    /// Sections come out in ascending order of type name.
    pub fn build(self) -> Result<ExpectationTable, TableError> {
        let mut sections: IndexMap<&'static str, TypeSection> = IndexMap::new();

        for section in self.sections {
            let mut seen = HashSet::new();
            for entry in &section.entries {
                if let Subject::Field { owner, field, .. } = entry.subject {
                    if owner != section.name {
                        return Err(TableError::ForeignField { section: section.name, owner, field });
                    }
                }
                if !seen.insert((entry.subject, entry.kind)) {
                    return Err(TableError::DuplicateEntry {
                        section: section.name,
                        identifier: entry.identifier(),
                    });
                }
            }

            if sections.contains_key(section.name) {
                return Err(TableError::DuplicateSection(section.name));
            }
            sections.insert(section.name, section);
        }

        sections.sort_keys();
        log::debug!("Built table {} with {} sections", self.name, sections.len());

        Ok(ExpectationTable::new(self.name, sections))
    }
}

pub struct SectionBuilder {
    section: TypeSection,
}

impl SectionBuilder {
    pub fn new(name: &'static str) -> Self {
        Self { section: TypeSection::new(name) }
    }

    pub fn packing(mut self, packing: u8) -> Self {
        self.section.packing = Some(packing);
        self
    }

    pub fn size<T>(self, size: usize) -> Self {
        let subject = self.type_subject();
        self.push(subject, FactKind::TypeSize, FactValue::Bytes(size), Probe::size_of::<T>())
    }

    pub fn alignment<T>(self, alignment: usize) -> Self {
        let subject = self.type_subject();
        self.push(subject, FactKind::TypeAlignment, FactValue::Bytes(alignment), Probe::align_of::<T>())
    }

    pub fn size_align<T>(self, size: usize, alignment: usize) -> Self {
        self.alignment::<T>(alignment).size::<T>(size)
    }

    /// The pointer's own size and alignment.
    pub fn pointer<P: Pointer>(self, size: usize, alignment: usize) -> Self {
        self.size_align::<P>(size, alignment)
    }

    /// Size and alignment of what `P` points to, checked apart from `P` itself.
    pub fn pointee<P: Pointer>(mut self, pointee: &'static str, size: usize, alignment: usize) -> Self {
        self.section.pointee = Some(pointee);
        let subject = Subject::Pointee { pointer: self.section.name };
        self.push(
            subject,
            FactKind::TypeAlignment,
            FactValue::Bytes(alignment),
            Probe::pointee_align_of::<P>(),
        )
        .push(subject, FactKind::TypeSize, FactValue::Bytes(size), Probe::pointee_size_of::<P>())
    }

    /// Field size, effective alignment and offset, in that order.
    pub fn field(self, probe: FieldProbe, offset: usize, size: usize, alignment: usize) -> Self {
        let subject = Self::field_subject(&probe);
        self.push(subject, FactKind::TypeSize, FactValue::Bytes(size), probe.size)
            .push(subject, FactKind::FieldAlignment, FactValue::Bytes(alignment), probe.alignment)
            .push(subject, FactKind::FieldOffset, FactValue::Bytes(offset), probe.offset)
    }

    pub fn field_offset(self, probe: FieldProbe, offset: usize) -> Self {
        let subject = Self::field_subject(&probe);
        self.push(subject, FactKind::FieldOffset, FactValue::Bytes(offset), probe.offset)
    }

    pub fn signed<T: Integral>(self) -> Self {
        let subject = self.type_subject();
        self.push(
            subject,
            FactKind::Signedness,
            FactValue::Sign(Signedness::Signed),
            Probe::signedness_of::<T>(),
        )
    }

    pub fn unsigned<T: Integral>(self) -> Self {
        let subject = self.type_subject();
        self.push(
            subject,
            FactKind::Signedness,
            FactValue::Sign(Signedness::Unsigned),
            Probe::signedness_of::<T>(),
        )
    }

    pub fn finish(self) -> TypeSection {
        self.section
    }

    fn type_subject(&self) -> Subject {
        Subject::Type { name: self.section.name }
    }

    fn field_subject(probe: &FieldProbe) -> Subject {
        Subject::Field { owner: probe.owner, field: probe.field, field_type: probe.field_type }
    }

    fn push(mut self, subject: Subject, kind: FactKind, expected: FactValue, probe: Probe) -> Self {
        self.section.entries.push(ExpectationEntry::new(subject, kind, expected, probe));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    #[repr(C)]
    struct Pair {
        lo: u32,
        hi: u16,
    }

    #[test]
    fn test_sections_are_sorted_by_name() {
        let table = TableBuilder::new("sample")
            .section("Pair", |s| s.size_align::<Pair>(8, 4))
            .opaque("Callback")
            .section("Alias", |s| s.size::<u8>(1))
            .build()
            .unwrap();

        let names: Vec<_> = table.sections().map(|s| s.name).collect();
        assert_eq!(names, vec!["Alias", "Callback", "Pair"]);
        assert!(table.section("Callback").unwrap().is_documentation_only());
    }

    #[test]
    fn test_field_rows_follow_declaration_order() {
        let table = TableBuilder::new("sample")
            .section("Pair", |s| s.field(crate::field!(Pair, u16, hi), 4, 2, 2))
            .build()
            .unwrap();

        let kinds: Vec<_> = table.entries().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![FactKind::TypeSize, FactKind::FieldAlignment, FactKind::FieldOffset]);
        assert_eq!(table.entries().next().unwrap().identifier(), "sizeof(Pair, hi)");
    }

    #[test]
    fn test_pointer_and_pointee_are_separate_rows() {
        let table = TableBuilder::new("sample")
            .section("PPair", |s| s.pointer::<*const Pair>(8, 8).pointee::<*const Pair>("Pair", 8, 4))
            .build()
            .unwrap();

        let section = table.section("PPair").unwrap();
        assert_eq!(section.len(), 4);
        assert_eq!(section.pointee, Some("Pair"));
        assert_eq!(section.pointee_size(), Some(8));
        assert_eq!(section.type_size(), Some(8));
    }

    #[test]
    fn test_duplicate_section_is_rejected() {
        let err = TableBuilder::new("sample")
            .opaque("Pair")
            .section("Pair", |s| s.size::<Pair>(8))
            .build()
            .unwrap_err();
        assert_eq!(err, TableError::DuplicateSection("Pair"));
    }

    #[test]
    fn test_duplicate_row_is_rejected() {
        let err = TableBuilder::new("sample")
            .section("Pair", |s| s.size::<Pair>(8).size::<Pair>(8))
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicateEntry { section: "Pair", .. }));
    }

    #[test]
    fn test_field_from_another_type_is_rejected() {
        let err = TableBuilder::new("sample")
            .section("Other", |s| s.field_offset(crate::field!(Pair, u32, lo), 0))
            .build()
            .unwrap_err();
        assert_eq!(err, TableError::ForeignField { section: "Other", owner: "Pair", field: "lo" });
    }
}
