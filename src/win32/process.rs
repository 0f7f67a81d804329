// Thu Oct 15 2026 - Alex

use super::types::*;
use super::Ptr32;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CRITICAL_SECTION_DEBUG {
    pub Type: WORD,
    pub CreatorBackTraceIndex: WORD,
    pub CriticalSection: Ptr32<CRITICAL_SECTION>,
    pub ProcessLocksList: LIST_ENTRY,
    pub EntryCount: DWORD,
    pub ContentionCount: DWORD,
    pub Spare: [DWORD; 2],
}

pub type LPCRITICAL_SECTION_DEBUG = Ptr32<CRITICAL_SECTION_DEBUG>;
pub type PCRITICAL_SECTION_DEBUG = Ptr32<CRITICAL_SECTION_DEBUG>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CRITICAL_SECTION {
    pub DebugInfo: PCRITICAL_SECTION_DEBUG,
    pub LockCount: LONG,
    pub RecursionCount: LONG,
    pub OwningThread: HANDLE,
    pub LockSemaphore: HANDLE,
    pub SpinCount: ULONG_PTR,
}

pub type LPCRITICAL_SECTION = Ptr32<CRITICAL_SECTION>;
pub type PCRITICAL_SECTION = Ptr32<CRITICAL_SECTION>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PROCESS_INFORMATION {
    pub hProcess: HANDLE,
    pub hThread: HANDLE,
    pub dwProcessId: DWORD,
    pub dwThreadId: DWORD,
}

pub type LPPROCESS_INFORMATION = Ptr32<PROCESS_INFORMATION>;
pub type PPROCESS_INFORMATION = Ptr32<PROCESS_INFORMATION>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct STARTUPINFOA {
    pub cb: DWORD,
    pub lpReserved: LPSTR,
    pub lpDesktop: LPSTR,
    pub lpTitle: LPSTR,
    pub dwX: DWORD,
    pub dwY: DWORD,
    pub dwXSize: DWORD,
    pub dwYSize: DWORD,
    pub dwXCountChars: DWORD,
    pub dwYCountChars: DWORD,
    pub dwFillAttribute: DWORD,
    pub dwFlags: DWORD,
    pub wShowWindow: WORD,
    pub cbReserved2: WORD,
    pub lpReserved2: LPBYTE,
    pub hStdInput: HANDLE,
    pub hStdOutput: HANDLE,
    pub hStdError: HANDLE,
}

pub type LPSTARTUPINFOA = Ptr32<STARTUPINFOA>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct STARTUPINFOW {
    pub cb: DWORD,
    pub lpReserved: LPWSTR,
    pub lpDesktop: LPWSTR,
    pub lpTitle: LPWSTR,
    pub dwX: DWORD,
    pub dwY: DWORD,
    pub dwXSize: DWORD,
    pub dwYSize: DWORD,
    pub dwXCountChars: DWORD,
    pub dwYCountChars: DWORD,
    pub dwFillAttribute: DWORD,
    pub dwFlags: DWORD,
    pub wShowWindow: WORD,
    pub cbReserved2: WORD,
    pub lpReserved2: LPBYTE,
    pub hStdInput: HANDLE,
    pub hStdOutput: HANDLE,
    pub hStdError: HANDLE,
}

pub type LPSTARTUPINFOW = Ptr32<STARTUPINFOW>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PROCESS_HEAP_ENTRY_BLOCK {
    pub hMem: HANDLE,
    pub dwReserved: [DWORD; 3],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PROCESS_HEAP_ENTRY_REGION {
    pub dwCommittedSize: DWORD,
    pub dwUnCommittedSize: DWORD,
    pub lpFirstBlock: LPVOID,
    pub lpLastBlock: LPVOID,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union PROCESS_HEAP_ENTRY_INFO {
    pub Block: PROCESS_HEAP_ENTRY_BLOCK,
    pub Region: PROCESS_HEAP_ENTRY_REGION,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct PROCESS_HEAP_ENTRY {
    pub lpData: LPVOID,
    pub cbData: DWORD,
    pub cbOverhead: BYTE,
    pub iRegionIndex: BYTE,
    pub wFlags: WORD,
    pub u: PROCESS_HEAP_ENTRY_INFO,
}

pub type LPPROCESS_HEAP_ENTRY = Ptr32<PROCESS_HEAP_ENTRY>;
pub type PPROCESS_HEAP_ENTRY = Ptr32<PROCESS_HEAP_ENTRY>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_critical_section_layouts() {
        assert_eq!(mem::size_of::<CRITICAL_SECTION>(), 24);
        assert_eq!(mem::size_of::<CRITICAL_SECTION_DEBUG>(), 32);
    }

    #[test]
    fn test_heap_entry_union_follows_header() {
        assert_eq!(mem::offset_of!(PROCESS_HEAP_ENTRY, u), 12);
        assert_eq!(mem::size_of::<PROCESS_HEAP_ENTRY>(), 28);
    }
}
