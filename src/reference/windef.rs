// Thu Oct 15 2026 - Alex

//! Basic typedefs the kernel32 structures are built from.

use crate::table::{ExpectationTable, TableBuilder, TableError};
use crate::win32::*;

pub fn windef_table() -> Result<ExpectationTable, TableError> {
    TableBuilder::new("windef")
        .section("BOOL", |s| s.size_align::<BOOL>(4, 4).signed::<BOOL>())
        .section("BYTE", |s| s.size_align::<BYTE>(1, 1).unsigned::<BYTE>())
        .section("CHAR", |s| s.size_align::<CHAR>(1, 1).signed::<CHAR>())
        .section("DWORD", |s| s.size_align::<DWORD>(4, 4).unsigned::<DWORD>())
        .section("DWORD_PTR", |s| s.size_align::<DWORD_PTR>(4, 4).unsigned::<DWORD_PTR>())
        .section("FILETIME", |s| {
            s.size_align::<FILETIME>(8, 4)
                .field(field!(FILETIME, DWORD, dwLowDateTime), 0, 4, 4)
                .field(field!(FILETIME, DWORD, dwHighDateTime), 4, 4, 4)
        })
        .section("HANDLE", |s| s.pointer::<HANDLE>(4, 4))
        // Quadword alignment differs between i386 ABIs, so only the size is recorded.
        .section("LARGE_INTEGER", |s| s.size::<LARGE_INTEGER>(8))
        .section("LIST_ENTRY", |s| {
            s.size_align::<LIST_ENTRY>(8, 4)
                .field(field!(LIST_ENTRY, Ptr32<LIST_ENTRY>, Flink), 0, 4, 4)
                .field(field!(LIST_ENTRY, Ptr32<LIST_ENTRY>, Blink), 4, 4, 4)
        })
        .section("LONG", |s| s.size_align::<LONG>(4, 4).signed::<LONG>())
        .section("LONGLONG", |s| s.size::<LONGLONG>(8).signed::<LONGLONG>())
        .section("LONG_PTR", |s| s.size_align::<LONG_PTR>(4, 4).signed::<LONG_PTR>())
        .section("LPVOID", |s| s.pointer::<LPVOID>(4, 4))
        .section("SIZE_T", |s| s.size_align::<SIZE_T>(4, 4).unsigned::<SIZE_T>())
        .section("ULONG_PTR", |s| s.size_align::<ULONG_PTR>(4, 4).unsigned::<ULONG_PTR>())
        .section("WCHAR", |s| s.size_align::<WCHAR>(2, 2).unsigned::<WCHAR>())
        .section("WORD", |s| s.size_align::<WORD>(2, 2).unsigned::<WORD>())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::LayoutChecker;
    use crate::layout::FactKind;

    #[test]
    fn test_windef_typedefs_match() {
        let run = LayoutChecker::compiled().run(&windef_table().unwrap());
        let failures: Vec<_> = run.failures().map(|o| o.message.clone()).collect();
        assert!(failures.is_empty(), "{:#?}", failures);
    }

    #[test]
    fn test_signedness_rows_present() {
        let table = windef_table().unwrap();
        let signed: Vec<_> = table
            .entries()
            .filter(|e| e.kind == FactKind::Signedness)
            .map(|e| e.identifier())
            .collect();
        assert_eq!(signed.len(), 12);
        assert!(signed.contains(&"signedness(CHAR)".to_string()));
    }
}
