// Thu Oct 15 2026 - Alex

pub mod kernel32;
pub mod windef;

pub use kernel32::kernel32_table;
pub use windef::windef_table;

use crate::table::{ExpectationTable, TableError};

pub const SUITES: &[&str] = &["kernel32", "windef"];

/// Builds the named reference suite, or `None` for an unknown name.
pub fn suite(name: &str) -> Option<Result<ExpectationTable, TableError>> {
    match name {
        "kernel32" => Some(kernel32_table()),
        "windef" => Some(windef_table()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_suite_builds() {
        for name in SUITES {
            let table = suite(name).unwrap().unwrap();
            assert_eq!(table.name(), *name);
            assert!(!table.is_empty());
        }
        assert!(suite("user32").is_none());
    }
}
