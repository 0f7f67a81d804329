// Thu Oct 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Duplicate section: {0}")]
    DuplicateSection(&'static str),
    #[error("Duplicate expectation in {section}: {identifier}")]
    DuplicateEntry {
        section: &'static str,
        identifier: String,
    },
    #[error("Field {owner}.{field} declared in section {section}")]
    ForeignField {
        section: &'static str,
        owner: &'static str,
        field: &'static str,
    },
}
