// Thu Oct 15 2026 - Alex

pub mod builder;
pub mod consistency;
pub mod entry;
pub mod error;
pub mod section;

pub use builder::{SectionBuilder, TableBuilder};
pub use consistency::{ConsistencyChecker, ConsistencyIssue, ConsistencyRule};
pub use entry::ExpectationEntry;
pub use error::TableError;
pub use section::{FieldSummary, TypeSection};

use indexmap::IndexMap;

/// Static catalogue of expected layout facts, one section per type name.
#[derive(Debug, Clone)]
pub struct ExpectationTable {
    name: String,
    sections: IndexMap<&'static str, TypeSection>,
}

impl ExpectationTable {
    pub(crate) fn new(name: String, sections: IndexMap<&'static str, TypeSection>) -> Self {
        Self { name, sections }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sections(&self) -> impl Iterator<Item = &TypeSection> {
        self.sections.values()
    }

    pub fn section(&self, name: &str) -> Option<&TypeSection> {
        self.sections.get(name)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ExpectationEntry> {
        self.sections.values().flat_map(|s| s.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sections kept only to record that their layout is not verified.
    pub fn documented_only(&self) -> impl Iterator<Item = &TypeSection> {
        self.sections().filter(|s| s.is_documentation_only())
    }
}
