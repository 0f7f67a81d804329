// Thu Oct 15 2026 - Alex

use super::types::*;
use super::Ptr32;

pub const EXCEPTION_MAXIMUM_PARAMETERS: usize = 15;
pub const SIZE_OF_80387_REGISTERS: usize = 80;
pub const MAXIMUM_SUPPORTED_EXTENSION: usize = 512;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct EXCEPTION_RECORD {
    pub ExceptionCode: DWORD,
    pub ExceptionFlags: DWORD,
    pub ExceptionRecord: Ptr32<EXCEPTION_RECORD>,
    pub ExceptionAddress: LPVOID,
    pub NumberParameters: DWORD,
    pub ExceptionInformation: [ULONG_PTR; EXCEPTION_MAXIMUM_PARAMETERS],
}

pub type LPEXCEPTION_RECORD = Ptr32<EXCEPTION_RECORD>;
pub type PEXCEPTION_RECORD = Ptr32<EXCEPTION_RECORD>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FLOATING_SAVE_AREA {
    pub ControlWord: DWORD,
    pub StatusWord: DWORD,
    pub TagWord: DWORD,
    pub ErrorOffset: DWORD,
    pub ErrorSelector: DWORD,
    pub DataOffset: DWORD,
    pub DataSelector: DWORD,
    pub RegisterArea: [BYTE; SIZE_OF_80387_REGISTERS],
    pub Cr0NpxState: DWORD,
}

/// i386 thread context.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CONTEXT {
    pub ContextFlags: DWORD,
    pub Dr0: DWORD,
    pub Dr1: DWORD,
    pub Dr2: DWORD,
    pub Dr3: DWORD,
    pub Dr6: DWORD,
    pub Dr7: DWORD,
    pub FloatSave: FLOATING_SAVE_AREA,
    pub SegGs: DWORD,
    pub SegFs: DWORD,
    pub SegEs: DWORD,
    pub SegDs: DWORD,
    pub Edi: DWORD,
    pub Esi: DWORD,
    pub Ebx: DWORD,
    pub Edx: DWORD,
    pub Ecx: DWORD,
    pub Eax: DWORD,
    pub Ebp: DWORD,
    pub Eip: DWORD,
    pub SegCs: DWORD,
    pub EFlags: DWORD,
    pub Esp: DWORD,
    pub SegSs: DWORD,
    pub ExtendedRegisters: [BYTE; MAXIMUM_SUPPORTED_EXTENSION],
}

pub type LPCONTEXT = Ptr32<CONTEXT>;
pub type PCONTEXT = Ptr32<CONTEXT>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct EXCEPTION_POINTERS {
    pub ExceptionRecord: PEXCEPTION_RECORD,
    pub ContextRecord: PCONTEXT,
}

pub type LPEXCEPTION_POINTERS = Ptr32<EXCEPTION_POINTERS>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct EXCEPTION_DEBUG_INFO {
    pub ExceptionRecord: EXCEPTION_RECORD,
    pub dwFirstChance: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CREATE_THREAD_DEBUG_INFO {
    pub hThread: HANDLE,
    pub lpThreadLocalBase: LPVOID,
    pub lpStartAddress: LPTHREAD_START_ROUTINE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CREATE_PROCESS_DEBUG_INFO {
    pub hFile: HANDLE,
    pub hProcess: HANDLE,
    pub hThread: HANDLE,
    pub lpBaseOfImage: LPVOID,
    pub dwDebugInfoFileOffset: DWORD,
    pub nDebugInfoSize: DWORD,
    pub lpThreadLocalBase: LPVOID,
    pub lpStartAddress: LPTHREAD_START_ROUTINE,
    pub lpImageName: LPVOID,
    pub fUnicode: WORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct EXIT_THREAD_DEBUG_INFO {
    pub dwExitCode: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct EXIT_PROCESS_DEBUG_INFO {
    pub dwExitCode: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LOAD_DLL_DEBUG_INFO {
    pub hFile: HANDLE,
    pub lpBaseOfDll: LPVOID,
    pub dwDebugInfoFileOffset: DWORD,
    pub nDebugInfoSize: DWORD,
    pub lpImageName: LPVOID,
    pub fUnicode: WORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct UNLOAD_DLL_DEBUG_INFO {
    pub lpBaseOfDll: LPVOID,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct OUTPUT_DEBUG_STRING_INFO {
    pub lpDebugStringData: LPSTR,
    pub fUnicode: WORD,
    pub nDebugStringLength: WORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RIP_INFO {
    pub dwError: DWORD,
    pub dwType: DWORD,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union DEBUG_EVENT_INFO {
    pub Exception: EXCEPTION_DEBUG_INFO,
    pub CreateThread: CREATE_THREAD_DEBUG_INFO,
    pub CreateProcessInfo: CREATE_PROCESS_DEBUG_INFO,
    pub ExitThread: EXIT_THREAD_DEBUG_INFO,
    pub ExitProcess: EXIT_PROCESS_DEBUG_INFO,
    pub LoadDll: LOAD_DLL_DEBUG_INFO,
    pub UnloadDll: UNLOAD_DLL_DEBUG_INFO,
    pub DebugString: OUTPUT_DEBUG_STRING_INFO,
    pub RipInfo: RIP_INFO,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct DEBUG_EVENT {
    pub dwDebugEventCode: DWORD,
    pub dwProcessId: DWORD,
    pub dwThreadId: DWORD,
    pub u: DEBUG_EVENT_INFO,
}

pub type LPDEBUG_EVENT = Ptr32<DEBUG_EVENT>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_i386_context_size() {
        assert_eq!(mem::size_of::<FLOATING_SAVE_AREA>(), 112);
        assert_eq!(mem::size_of::<CONTEXT>(), 716);
        assert_eq!(mem::offset_of!(CONTEXT, ExtendedRegisters), 204);
    }

    #[test]
    fn test_debug_event_union_holds_largest_member() {
        assert_eq!(mem::size_of::<DEBUG_EVENT_INFO>(), mem::size_of::<EXCEPTION_DEBUG_INFO>());
        assert_eq!(mem::size_of::<DEBUG_EVENT>(), 96);
    }
}
