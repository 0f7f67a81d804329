// Thu Oct 15 2026 - Alex

use super::Ptr32;
use std::ffi::c_void;

pub type BYTE = u8;
pub type WORD = u16;
pub type DWORD = u32;
pub type CHAR = i8;
pub type WCHAR = u16;
pub type LONG = i32;
pub type BOOL = i32;
pub type LONGLONG = i64;
pub type ULONG_PTR = u32;
pub type LONG_PTR = i32;
pub type DWORD_PTR = ULONG_PTR;
pub type SIZE_T = ULONG_PTR;

pub type LPVOID = Ptr32<c_void>;
pub type HANDLE = Ptr32<c_void>;
pub type LPSTR = Ptr32<CHAR>;
pub type LPWSTR = Ptr32<WCHAR>;
pub type LPBYTE = Ptr32<BYTE>;

pub const MAX_PATH: usize = 260;
pub const ANYSIZE_ARRAY: usize = 1;

/// Code address; only ever seen behind a [`Ptr32`].
pub enum Code {}

pub type LPTHREAD_START_ROUTINE = Ptr32<Code>;
pub type LPFIBER_START_ROUTINE = Ptr32<Code>;
pub type PFIBER_START_ROUTINE = Ptr32<Code>;
pub type LPOVERLAPPED_COMPLETION_ROUTINE = Ptr32<Code>;
pub type LPPROGRESS_ROUTINE = Ptr32<Code>;
pub type PAPCFUNC = Ptr32<Code>;
pub type PTIMERAPCROUTINE = Ptr32<Code>;
pub type WAITORTIMERCALLBACK = Ptr32<Code>;
pub type ENUMRESLANGPROCA = Ptr32<Code>;
pub type ENUMRESLANGPROCW = Ptr32<Code>;
pub type ENUMRESNAMEPROCA = Ptr32<Code>;
pub type ENUMRESNAMEPROCW = Ptr32<Code>;
pub type ENUMRESTYPEPROCA = Ptr32<Code>;
pub type ENUMRESTYPEPROCW = Ptr32<Code>;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FILETIME {
    pub dwLowDateTime: DWORD,
    pub dwHighDateTime: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LARGE_INTEGER_PARTS {
    pub LowPart: DWORD,
    pub HighPart: LONG,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union LARGE_INTEGER {
    pub u: LARGE_INTEGER_PARTS,
    pub QuadPart: LONGLONG,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LIST_ENTRY {
    pub Flink: Ptr32<LIST_ENTRY>,
    pub Blink: Ptr32<LIST_ENTRY>,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SYSTEMTIME {
    pub wYear: WORD,
    pub wMonth: WORD,
    pub wDayOfWeek: WORD,
    pub wDay: WORD,
    pub wHour: WORD,
    pub wMinute: WORD,
    pub wSecond: WORD,
    pub wMilliseconds: WORD,
}

pub type LPSYSTEMTIME = Ptr32<SYSTEMTIME>;
pub type PSYSTEMTIME = Ptr32<SYSTEMTIME>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SECURITY_ATTRIBUTES {
    pub nLength: DWORD,
    pub lpSecurityDescriptor: LPVOID,
    pub bInheritHandle: BOOL,
}

pub type LPSECURITY_ATTRIBUTES = Ptr32<SECURITY_ATTRIBUTES>;
pub type PSECURITY_ATTRIBUTES = Ptr32<SECURITY_ATTRIBUTES>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_basic_typedef_widths() {
        assert_eq!(mem::size_of::<HANDLE>(), 4);
        assert_eq!(mem::size_of::<SIZE_T>(), 4);
        assert_eq!(mem::size_of::<WCHAR>(), 2);
        assert_eq!(mem::size_of::<LPTHREAD_START_ROUTINE>(), 4);
    }

    #[test]
    fn test_large_integer_keeps_quadword_alignment() {
        assert_eq!(mem::size_of::<LARGE_INTEGER>(), 8);
        assert_eq!(mem::align_of::<LARGE_INTEGER>(), mem::align_of::<i64>());
        assert_eq!(mem::size_of::<LIST_ENTRY>(), 8);
    }
}
