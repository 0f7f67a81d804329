// Thu Oct 15 2026 - Alex

//! Recorded i386 layouts of the kernel32 structures.

use crate::table::{ExpectationTable, TableBuilder, TableError};
use crate::win32::*;

pub fn kernel32_table() -> Result<ExpectationTable, TableError> {
    TableBuilder::new("kernel32")
        .section("BY_HANDLE_FILE_INFORMATION", |s| {
            s.packing(4)
                .size_align::<BY_HANDLE_FILE_INFORMATION>(52, 4)
                .field(field!(BY_HANDLE_FILE_INFORMATION, DWORD, dwFileAttributes), 0, 4, 4)
                .field(field!(BY_HANDLE_FILE_INFORMATION, FILETIME, ftCreationTime), 4, 8, 4)
                .field(field!(BY_HANDLE_FILE_INFORMATION, FILETIME, ftLastAccessTime), 12, 8, 4)
                .field(field!(BY_HANDLE_FILE_INFORMATION, FILETIME, ftLastWriteTime), 20, 8, 4)
                .field(field!(BY_HANDLE_FILE_INFORMATION, DWORD, dwVolumeSerialNumber), 28, 4, 4)
                .field(field!(BY_HANDLE_FILE_INFORMATION, DWORD, nFileSizeHigh), 32, 4, 4)
                .field(field!(BY_HANDLE_FILE_INFORMATION, DWORD, nFileSizeLow), 36, 4, 4)
                .field(field!(BY_HANDLE_FILE_INFORMATION, DWORD, nNumberOfLinks), 40, 4, 4)
                .field(field!(BY_HANDLE_FILE_INFORMATION, DWORD, nFileIndexHigh), 44, 4, 4)
                .field(field!(BY_HANDLE_FILE_INFORMATION, DWORD, nFileIndexLow), 48, 4, 4)
        })
        .section("COMMCONFIG", |s| {
            s.packing(4)
                .field(field!(COMMCONFIG, DWORD, dwSize), 0, 4, 4)
                .field(field!(COMMCONFIG, WORD, wVersion), 4, 2, 2)
                .field(field!(COMMCONFIG, WORD, wReserved), 6, 2, 2)
        })
        .section("COMMPROP", |s| {
            s.packing(4)
                .size_align::<COMMPROP>(64, 4)
                .field(field!(COMMPROP, WORD, wPacketLength), 0, 2, 2)
                .field(field!(COMMPROP, WORD, wPacketVersion), 2, 2, 2)
                .field(field!(COMMPROP, DWORD, dwServiceMask), 4, 4, 4)
                .field(field!(COMMPROP, DWORD, dwReserved1), 8, 4, 4)
                .field(field!(COMMPROP, DWORD, dwMaxTxQueue), 12, 4, 4)
                .field(field!(COMMPROP, DWORD, dwMaxRxQueue), 16, 4, 4)
                .field(field!(COMMPROP, DWORD, dwMaxBaud), 20, 4, 4)
                .field(field!(COMMPROP, DWORD, dwProvSubType), 24, 4, 4)
                .field(field!(COMMPROP, DWORD, dwProvCapabilities), 28, 4, 4)
                .field(field!(COMMPROP, DWORD, dwSettableParams), 32, 4, 4)
                .field(field!(COMMPROP, DWORD, dwSettableBaud), 36, 4, 4)
                .field(field!(COMMPROP, WORD, wSettableData), 40, 2, 2)
                .field(field!(COMMPROP, WORD, wSettableStopParity), 42, 2, 2)
                .field(field!(COMMPROP, DWORD, dwCurrentTxQueue), 44, 4, 4)
                .field(field!(COMMPROP, DWORD, dwCurrentRxQueue), 48, 4, 4)
                .field(field!(COMMPROP, DWORD, dwProvSpec1), 52, 4, 4)
                .field(field!(COMMPROP, DWORD, dwProvSpec2), 56, 4, 4)
                .field(field!(COMMPROP, [WCHAR; 1], wcProvChar), 60, 2, 2)
        })
        .section("COMMTIMEOUTS", |s| {
            s.packing(4)
                .size_align::<COMMTIMEOUTS>(20, 4)
                .field(field!(COMMTIMEOUTS, DWORD, ReadIntervalTimeout), 0, 4, 4)
                .field(field!(COMMTIMEOUTS, DWORD, ReadTotalTimeoutMultiplier), 4, 4, 4)
                .field(field!(COMMTIMEOUTS, DWORD, ReadTotalTimeoutConstant), 8, 4, 4)
                .field(field!(COMMTIMEOUTS, DWORD, WriteTotalTimeoutMultiplier), 12, 4, 4)
                .field(field!(COMMTIMEOUTS, DWORD, WriteTotalTimeoutConstant), 16, 4, 4)
        })
        // Status flags are bitfields and have no row.
        .section("COMSTAT", |s| {
            s.packing(4)
                .size_align::<COMSTAT>(12, 4)
                .field(field!(COMSTAT, DWORD, cbInQue), 4, 4, 4)
                .field(field!(COMSTAT, DWORD, cbOutQue), 8, 4, 4)
        })
        .section("CREATE_PROCESS_DEBUG_INFO", |s| {
            s.packing(4)
                .size_align::<CREATE_PROCESS_DEBUG_INFO>(40, 4)
                .field(field!(CREATE_PROCESS_DEBUG_INFO, HANDLE, hFile), 0, 4, 4)
                .field(field!(CREATE_PROCESS_DEBUG_INFO, HANDLE, hProcess), 4, 4, 4)
                .field(field!(CREATE_PROCESS_DEBUG_INFO, HANDLE, hThread), 8, 4, 4)
                .field(field!(CREATE_PROCESS_DEBUG_INFO, LPVOID, lpBaseOfImage), 12, 4, 4)
                .field(field!(CREATE_PROCESS_DEBUG_INFO, DWORD, dwDebugInfoFileOffset), 16, 4, 4)
                .field(field!(CREATE_PROCESS_DEBUG_INFO, DWORD, nDebugInfoSize), 20, 4, 4)
                .field(field!(CREATE_PROCESS_DEBUG_INFO, LPVOID, lpThreadLocalBase), 24, 4, 4)
                .field(field!(CREATE_PROCESS_DEBUG_INFO, LPTHREAD_START_ROUTINE, lpStartAddress), 28, 4, 4)
                .field(field!(CREATE_PROCESS_DEBUG_INFO, LPVOID, lpImageName), 32, 4, 4)
                .field(field!(CREATE_PROCESS_DEBUG_INFO, WORD, fUnicode), 36, 2, 2)
        })
        .section("CREATE_THREAD_DEBUG_INFO", |s| {
            s.packing(4)
                .size_align::<CREATE_THREAD_DEBUG_INFO>(12, 4)
                .field(field!(CREATE_THREAD_DEBUG_INFO, HANDLE, hThread), 0, 4, 4)
                .field(field!(CREATE_THREAD_DEBUG_INFO, LPVOID, lpThreadLocalBase), 4, 4, 4)
                .field(field!(CREATE_THREAD_DEBUG_INFO, LPTHREAD_START_ROUTINE, lpStartAddress), 8, 4, 4)
        })
        .section("CRITICAL_SECTION", |s| s.size_align::<CRITICAL_SECTION>(24, 4))
        .section("CRITICAL_SECTION_DEBUG", |s| s.size_align::<CRITICAL_SECTION_DEBUG>(32, 4))
        .section("DCB", |s| {
            s.packing(4)
                .field(field!(DCB, DWORD, DCBlength), 0, 4, 4)
                .field(field!(DCB, DWORD, BaudRate), 4, 4, 4)
        })
        .section("DEBUG_EVENT", |s| {
            s.packing(4)
                .field(field!(DEBUG_EVENT, DWORD, dwDebugEventCode), 0, 4, 4)
                .field(field!(DEBUG_EVENT, DWORD, dwProcessId), 4, 4, 4)
                .field(field!(DEBUG_EVENT, DWORD, dwThreadId), 8, 4, 4)
        })
        .opaque("ENUMRESLANGPROCA")
        .opaque("ENUMRESLANGPROCW")
        .opaque("ENUMRESNAMEPROCA")
        .opaque("ENUMRESNAMEPROCW")
        .opaque("ENUMRESTYPEPROCA")
        .opaque("ENUMRESTYPEPROCW")
        .section("EXCEPTION_DEBUG_INFO", |s| {
            s.packing(4)
                .size_align::<EXCEPTION_DEBUG_INFO>(84, 4)
                .field(field!(EXCEPTION_DEBUG_INFO, EXCEPTION_RECORD, ExceptionRecord), 0, 80, 4)
                .field(field!(EXCEPTION_DEBUG_INFO, DWORD, dwFirstChance), 80, 4, 4)
        })
        .section("EXIT_PROCESS_DEBUG_INFO", |s| {
            s.packing(4)
                .size_align::<EXIT_PROCESS_DEBUG_INFO>(4, 4)
                .field(field!(EXIT_PROCESS_DEBUG_INFO, DWORD, dwExitCode), 0, 4, 4)
        })
        .section("EXIT_THREAD_DEBUG_INFO", |s| {
            s.packing(4)
                .size_align::<EXIT_THREAD_DEBUG_INFO>(4, 4)
                .field(field!(EXIT_THREAD_DEBUG_INFO, DWORD, dwExitCode), 0, 4, 4)
        })
        .section("HW_PROFILE_INFOA", |s| {
            s.packing(4)
                .size_align::<HW_PROFILE_INFOA>(124, 4)
                .field(field!(HW_PROFILE_INFOA, DWORD, dwDockInfo), 0, 4, 4)
                .field(field!(HW_PROFILE_INFOA, [CHAR; HW_PROFILE_GUIDLEN], szHwProfileGuid), 4, 39, 1)
                .field(field!(HW_PROFILE_INFOA, [CHAR; MAX_PROFILE_LEN], szHwProfileName), 43, 80, 1)
        })
        .section("LDT_ENTRY", |s| {
            s.packing(4)
                .field(field!(LDT_ENTRY, WORD, LimitLow), 0, 2, 2)
                .field(field!(LDT_ENTRY, WORD, BaseLow), 2, 2, 2)
        })
        .section("LOAD_DLL_DEBUG_INFO", |s| {
            s.packing(4)
                .size_align::<LOAD_DLL_DEBUG_INFO>(24, 4)
                .field(field!(LOAD_DLL_DEBUG_INFO, HANDLE, hFile), 0, 4, 4)
                .field(field!(LOAD_DLL_DEBUG_INFO, LPVOID, lpBaseOfDll), 4, 4, 4)
                .field(field!(LOAD_DLL_DEBUG_INFO, DWORD, dwDebugInfoFileOffset), 8, 4, 4)
                .field(field!(LOAD_DLL_DEBUG_INFO, DWORD, nDebugInfoSize), 12, 4, 4)
                .field(field!(LOAD_DLL_DEBUG_INFO, LPVOID, lpImageName), 16, 4, 4)
                .field(field!(LOAD_DLL_DEBUG_INFO, WORD, fUnicode), 20, 2, 2)
        })
        .section("LPBY_HANDLE_FILE_INFORMATION", |s| {
            s.pointer::<LPBY_HANDLE_FILE_INFORMATION>(4, 4)
                .pointee::<LPBY_HANDLE_FILE_INFORMATION>("BY_HANDLE_FILE_INFORMATION", 52, 4)
        })
        .section("LPCOMMCONFIG", |s| s.pointer::<LPCOMMCONFIG>(4, 4))
        .section("LPCOMMPROP", |s| {
            s.pointer::<LPCOMMPROP>(4, 4).pointee::<LPCOMMPROP>("COMMPROP", 64, 4)
        })
        .section("LPCOMMTIMEOUTS", |s| {
            s.pointer::<LPCOMMTIMEOUTS>(4, 4).pointee::<LPCOMMTIMEOUTS>("COMMTIMEOUTS", 20, 4)
        })
        .section("LPCOMSTAT", |s| {
            s.pointer::<LPCOMSTAT>(4, 4).pointee::<LPCOMSTAT>("COMSTAT", 12, 4)
        })
        .section("LPCONTEXT", |s| s.pointer::<LPCONTEXT>(4, 4))
        .section("LPCRITICAL_SECTION", |s| s.pointer::<LPCRITICAL_SECTION>(4, 4))
        .section("LPCRITICAL_SECTION_DEBUG", |s| s.pointer::<LPCRITICAL_SECTION_DEBUG>(4, 4))
        .section("LPDCB", |s| s.pointer::<LPDCB>(4, 4))
        .section("LPDEBUG_EVENT", |s| s.pointer::<LPDEBUG_EVENT>(4, 4))
        .section("LPEXCEPTION_POINTERS", |s| s.pointer::<LPEXCEPTION_POINTERS>(4, 4))
        .section("LPEXCEPTION_RECORD", |s| s.pointer::<LPEXCEPTION_RECORD>(4, 4))
        .opaque("LPFIBER_START_ROUTINE")
        .section("LPHW_PROFILE_INFOA", |s| {
            s.pointer::<LPHW_PROFILE_INFOA>(4, 4).pointee::<LPHW_PROFILE_INFOA>("HW_PROFILE_INFOA", 124, 4)
        })
        .section("LPHW_PROFILE_INFOW", |s| {
            s.pointer::<LPHW_PROFILE_INFOW>(4, 4).pointee::<LPHW_PROFILE_INFOW>("HW_PROFILE_INFOW", 244, 4)
        })
        .section("LPLDT_ENTRY", |s| s.pointer::<LPLDT_ENTRY>(4, 4))
        .section("LPMEMORYSTATUS", |s| {
            s.pointer::<LPMEMORYSTATUS>(4, 4).pointee::<LPMEMORYSTATUS>("MEMORYSTATUS", 32, 4)
        })
        .section("LPOFSTRUCT", |s| {
            s.pointer::<LPOFSTRUCT>(4, 4).pointee::<LPOFSTRUCT>("OFSTRUCT", 136, 2)
        })
        .section("LPOSVERSIONINFOA", |s| {
            s.pointer::<LPOSVERSIONINFOA>(4, 4).pointee::<LPOSVERSIONINFOA>("OSVERSIONINFOA", 148, 4)
        })
        .section("LPOSVERSIONINFOEXA", |s| s.pointer::<LPOSVERSIONINFOEXA>(4, 4))
        .section("LPOSVERSIONINFOEXW", |s| s.pointer::<LPOSVERSIONINFOEXW>(4, 4))
        .section("LPOSVERSIONINFOW", |s| {
            s.pointer::<LPOSVERSIONINFOW>(4, 4).pointee::<LPOSVERSIONINFOW>("OSVERSIONINFOW", 276, 4)
        })
        .section("LPOVERLAPPED", |s| {
            s.pointer::<LPOVERLAPPED>(4, 4).pointee::<LPOVERLAPPED>("OVERLAPPED", 20, 4)
        })
        .opaque("LPOVERLAPPED_COMPLETION_ROUTINE")
        .section("LPPROCESS_HEAP_ENTRY", |s| s.pointer::<LPPROCESS_HEAP_ENTRY>(4, 4))
        .section("LPPROCESS_INFORMATION", |s| {
            s.pointer::<LPPROCESS_INFORMATION>(4, 4)
                .pointee::<LPPROCESS_INFORMATION>("PROCESS_INFORMATION", 16, 4)
        })
        .opaque("LPPROGRESS_ROUTINE")
        .section("LPSECURITY_ATTRIBUTES", |s| {
            s.pointer::<LPSECURITY_ATTRIBUTES>(4, 4)
                .pointee::<LPSECURITY_ATTRIBUTES>("SECURITY_ATTRIBUTES", 12, 4)
        })
        .section("LPSTARTUPINFOA", |s| {
            s.pointer::<LPSTARTUPINFOA>(4, 4).pointee::<LPSTARTUPINFOA>("STARTUPINFOA", 68, 4)
        })
        .section("LPSTARTUPINFOW", |s| {
            s.pointer::<LPSTARTUPINFOW>(4, 4).pointee::<LPSTARTUPINFOW>("STARTUPINFOW", 68, 4)
        })
        .section("LPSYSTEMTIME", |s| {
            s.pointer::<LPSYSTEMTIME>(4, 4).pointee::<LPSYSTEMTIME>("SYSTEMTIME", 16, 2)
        })
        .section("LPSYSTEM_INFO", |s| s.pointer::<LPSYSTEM_INFO>(4, 4))
        .section("LPSYSTEM_POWER_STATUS", |s| {
            s.pointer::<LPSYSTEM_POWER_STATUS>(4, 4)
                .pointee::<LPSYSTEM_POWER_STATUS>("SYSTEM_POWER_STATUS", 12, 4)
        })
        .opaque("LPTHREAD_START_ROUTINE")
        .section("LPTIME_ZONE_INFORMATION", |s| {
            s.pointer::<LPTIME_ZONE_INFORMATION>(4, 4)
                .pointee::<LPTIME_ZONE_INFORMATION>("TIME_ZONE_INFORMATION", 172, 4)
        })
        .section("LPWIN32_FILE_ATTRIBUTE_DATA", |s| {
            s.pointer::<LPWIN32_FILE_ATTRIBUTE_DATA>(4, 4)
                .pointee::<LPWIN32_FILE_ATTRIBUTE_DATA>("WIN32_FILE_ATTRIBUTE_DATA", 36, 4)
        })
        .section("LPWIN32_FIND_DATAA", |s| {
            s.pointer::<LPWIN32_FIND_DATAA>(4, 4).pointee::<LPWIN32_FIND_DATAA>("WIN32_FIND_DATAA", 320, 4)
        })
        .section("LPWIN32_FIND_DATAW", |s| {
            s.pointer::<LPWIN32_FIND_DATAW>(4, 4).pointee::<LPWIN32_FIND_DATAW>("WIN32_FIND_DATAW", 592, 4)
        })
        .section("LPWIN32_STREAM_ID", |s| {
            s.pointer::<LPWIN32_STREAM_ID>(4, 4).pointee::<LPWIN32_STREAM_ID>("WIN32_STREAM_ID", 24, 4)
        })
        .section("MEMORYSTATUS", |s| {
            s.packing(4)
                .size_align::<MEMORYSTATUS>(32, 4)
                .field(field!(MEMORYSTATUS, DWORD, dwLength), 0, 4, 4)
                .field(field!(MEMORYSTATUS, DWORD, dwMemoryLoad), 4, 4, 4)
                .field(field!(MEMORYSTATUS, SIZE_T, dwTotalPhys), 8, 4, 4)
                .field(field!(MEMORYSTATUS, SIZE_T, dwAvailPhys), 12, 4, 4)
                .field(field!(MEMORYSTATUS, SIZE_T, dwTotalPageFile), 16, 4, 4)
                .field(field!(MEMORYSTATUS, SIZE_T, dwAvailPageFile), 20, 4, 4)
                .field(field!(MEMORYSTATUS, SIZE_T, dwTotalVirtual), 24, 4, 4)
                .field(field!(MEMORYSTATUS, SIZE_T, dwAvailVirtual), 28, 4, 4)
        })
        .section("OFSTRUCT", |s| {
            s.packing(4)
                .size_align::<OFSTRUCT>(136, 2)
                .field(field!(OFSTRUCT, BYTE, cBytes), 0, 1, 1)
                .field(field!(OFSTRUCT, BYTE, fFixedDisk), 1, 1, 1)
                .field(field!(OFSTRUCT, WORD, nErrCode), 2, 2, 2)
                .field(field!(OFSTRUCT, WORD, Reserved1), 4, 2, 2)
                .field(field!(OFSTRUCT, WORD, Reserved2), 6, 2, 2)
                .field(field!(OFSTRUCT, [BYTE; OFS_MAXPATHNAME], szPathName), 8, 128, 1)
        })
        .section("OSVERSIONINFOA", |s| {
            s.packing(4)
                .size_align::<OSVERSIONINFOA>(148, 4)
                .field(field!(OSVERSIONINFOA, DWORD, dwOSVersionInfoSize), 0, 4, 4)
                .field(field!(OSVERSIONINFOA, DWORD, dwMajorVersion), 4, 4, 4)
                .field(field!(OSVERSIONINFOA, DWORD, dwMinorVersion), 8, 4, 4)
                .field(field!(OSVERSIONINFOA, DWORD, dwBuildNumber), 12, 4, 4)
                .field(field!(OSVERSIONINFOA, DWORD, dwPlatformId), 16, 4, 4)
                .field(field!(OSVERSIONINFOA, [CHAR; 128], szCSDVersion), 20, 128, 1)
        })
        .section("OSVERSIONINFOEXA", |s| {
            s.packing(4)
                .field(field!(OSVERSIONINFOEXA, DWORD, dwOSVersionInfoSize), 0, 4, 4)
                .field(field!(OSVERSIONINFOEXA, DWORD, dwMajorVersion), 4, 4, 4)
                .field(field!(OSVERSIONINFOEXA, DWORD, dwMinorVersion), 8, 4, 4)
                .field(field!(OSVERSIONINFOEXA, DWORD, dwBuildNumber), 12, 4, 4)
                .field(field!(OSVERSIONINFOEXA, DWORD, dwPlatformId), 16, 4, 4)
                .field(field!(OSVERSIONINFOEXA, [CHAR; 128], szCSDVersion), 20, 128, 1)
                .field(field!(OSVERSIONINFOEXA, WORD, wServicePackMajor), 148, 2, 2)
                .field(field!(OSVERSIONINFOEXA, WORD, wServicePackMinor), 150, 2, 2)
        })
        .section("OSVERSIONINFOEXW", |s| {
            s.packing(4)
                .field(field!(OSVERSIONINFOEXW, DWORD, dwOSVersionInfoSize), 0, 4, 4)
                .field(field!(OSVERSIONINFOEXW, DWORD, dwMajorVersion), 4, 4, 4)
                .field(field!(OSVERSIONINFOEXW, DWORD, dwMinorVersion), 8, 4, 4)
                .field(field!(OSVERSIONINFOEXW, DWORD, dwBuildNumber), 12, 4, 4)
                .field(field!(OSVERSIONINFOEXW, DWORD, dwPlatformId), 16, 4, 4)
                .field(field!(OSVERSIONINFOEXW, [WCHAR; 128], szCSDVersion), 20, 256, 2)
                .field(field!(OSVERSIONINFOEXW, WORD, wServicePackMajor), 276, 2, 2)
                .field(field!(OSVERSIONINFOEXW, WORD, wServicePackMinor), 278, 2, 2)
        })
        .section("OSVERSIONINFOW", |s| {
            s.packing(4)
                .size_align::<OSVERSIONINFOW>(276, 4)
                .field(field!(OSVERSIONINFOW, DWORD, dwOSVersionInfoSize), 0, 4, 4)
                .field(field!(OSVERSIONINFOW, DWORD, dwMajorVersion), 4, 4, 4)
                .field(field!(OSVERSIONINFOW, DWORD, dwMinorVersion), 8, 4, 4)
                .field(field!(OSVERSIONINFOW, DWORD, dwBuildNumber), 12, 4, 4)
                .field(field!(OSVERSIONINFOW, DWORD, dwPlatformId), 16, 4, 4)
                .field(field!(OSVERSIONINFOW, [WCHAR; 128], szCSDVersion), 20, 256, 2)
        })
        .section("OUTPUT_DEBUG_STRING_INFO", |s| {
            s.packing(4)
                .size_align::<OUTPUT_DEBUG_STRING_INFO>(8, 4)
                .field(field!(OUTPUT_DEBUG_STRING_INFO, LPSTR, lpDebugStringData), 0, 4, 4)
                .field(field!(OUTPUT_DEBUG_STRING_INFO, WORD, fUnicode), 4, 2, 2)
                .field(field!(OUTPUT_DEBUG_STRING_INFO, WORD, nDebugStringLength), 6, 2, 2)
        })
        .section("OVERLAPPED", |s| {
            s.packing(4)
                .size_align::<OVERLAPPED>(20, 4)
                .field(field!(OVERLAPPED, DWORD, Internal), 0, 4, 4)
                .field(field!(OVERLAPPED, DWORD, InternalHigh), 4, 4, 4)
                .field(field!(OVERLAPPED, DWORD, Offset), 8, 4, 4)
                .field(field!(OVERLAPPED, DWORD, OffsetHigh), 12, 4, 4)
                .field(field!(OVERLAPPED, HANDLE, hEvent), 16, 4, 4)
        })
        .opaque("PAPCFUNC")
        .section("PBY_HANDLE_FILE_INFORMATION", |s| {
            s.pointer::<PBY_HANDLE_FILE_INFORMATION>(4, 4)
                .pointee::<PBY_HANDLE_FILE_INFORMATION>("BY_HANDLE_FILE_INFORMATION", 52, 4)
        })
        .section("PCRITICAL_SECTION", |s| s.pointer::<PCRITICAL_SECTION>(4, 4))
        .section("PCRITICAL_SECTION_DEBUG", |s| s.pointer::<PCRITICAL_SECTION_DEBUG>(4, 4))
        .opaque("PFIBER_START_ROUTINE")
        .section("POFSTRUCT", |s| {
            s.pointer::<POFSTRUCT>(4, 4).pointee::<POFSTRUCT>("OFSTRUCT", 136, 2)
        })
        .section("POSVERSIONINFOA", |s| {
            s.pointer::<POSVERSIONINFOA>(4, 4).pointee::<POSVERSIONINFOA>("OSVERSIONINFOA", 148, 4)
        })
        .section("POSVERSIONINFOEXA", |s| s.pointer::<POSVERSIONINFOEXA>(4, 4))
        .section("POSVERSIONINFOEXW", |s| s.pointer::<POSVERSIONINFOEXW>(4, 4))
        .section("POSVERSIONINFOW", |s| {
            s.pointer::<POSVERSIONINFOW>(4, 4).pointee::<POSVERSIONINFOW>("OSVERSIONINFOW", 276, 4)
        })
        .section("PPROCESS_HEAP_ENTRY", |s| s.pointer::<PPROCESS_HEAP_ENTRY>(4, 4))
        .section("PPROCESS_INFORMATION", |s| {
            s.pointer::<PPROCESS_INFORMATION>(4, 4)
                .pointee::<PPROCESS_INFORMATION>("PROCESS_INFORMATION", 16, 4)
        })
        .section("PROCESS_HEAP_ENTRY", |s| {
            s.packing(4)
                .field(field!(PROCESS_HEAP_ENTRY, LPVOID, lpData), 0, 4, 4)
                .field(field!(PROCESS_HEAP_ENTRY, DWORD, cbData), 4, 4, 4)
                .field(field!(PROCESS_HEAP_ENTRY, BYTE, cbOverhead), 8, 1, 1)
                .field(field!(PROCESS_HEAP_ENTRY, BYTE, iRegionIndex), 9, 1, 1)
                .field(field!(PROCESS_HEAP_ENTRY, WORD, wFlags), 10, 2, 2)
        })
        .section("PROCESS_INFORMATION", |s| {
            s.packing(4)
                .size_align::<PROCESS_INFORMATION>(16, 4)
                .field(field!(PROCESS_INFORMATION, HANDLE, hProcess), 0, 4, 4)
                .field(field!(PROCESS_INFORMATION, HANDLE, hThread), 4, 4, 4)
                .field(field!(PROCESS_INFORMATION, DWORD, dwProcessId), 8, 4, 4)
                .field(field!(PROCESS_INFORMATION, DWORD, dwThreadId), 12, 4, 4)
        })
        .section("PSECURITY_ATTRIBUTES", |s| {
            s.pointer::<PSECURITY_ATTRIBUTES>(4, 4)
                .pointee::<PSECURITY_ATTRIBUTES>("SECURITY_ATTRIBUTES", 12, 4)
        })
        .section("PSYSTEMTIME", |s| {
            s.pointer::<PSYSTEMTIME>(4, 4).pointee::<PSYSTEMTIME>("SYSTEMTIME", 16, 2)
        })
        .opaque("PTIMERAPCROUTINE")
        .section("PTIME_ZONE_INFORMATION", |s| {
            s.pointer::<PTIME_ZONE_INFORMATION>(4, 4)
                .pointee::<PTIME_ZONE_INFORMATION>("TIME_ZONE_INFORMATION", 172, 4)
        })
        .section("PWIN32_FIND_DATAA", |s| {
            s.pointer::<PWIN32_FIND_DATAA>(4, 4).pointee::<PWIN32_FIND_DATAA>("WIN32_FIND_DATAA", 320, 4)
        })
        .section("PWIN32_FIND_DATAW", |s| {
            s.pointer::<PWIN32_FIND_DATAW>(4, 4).pointee::<PWIN32_FIND_DATAW>("WIN32_FIND_DATAW", 592, 4)
        })
        .section("RIP_INFO", |s| {
            s.packing(4)
                .size_align::<RIP_INFO>(8, 4)
                .field(field!(RIP_INFO, DWORD, dwError), 0, 4, 4)
                .field(field!(RIP_INFO, DWORD, dwType), 4, 4, 4)
        })
        .section("SECURITY_ATTRIBUTES", |s| {
            s.packing(4)
                .size_align::<SECURITY_ATTRIBUTES>(12, 4)
                .field(field!(SECURITY_ATTRIBUTES, DWORD, nLength), 0, 4, 4)
                .field(field!(SECURITY_ATTRIBUTES, LPVOID, lpSecurityDescriptor), 4, 4, 4)
                .field(field!(SECURITY_ATTRIBUTES, BOOL, bInheritHandle), 8, 4, 4)
        })
        .section("STARTUPINFOA", |s| {
            s.packing(4)
                .size_align::<STARTUPINFOA>(68, 4)
                .field(field!(STARTUPINFOA, DWORD, cb), 0, 4, 4)
                .field(field!(STARTUPINFOA, LPSTR, lpReserved), 4, 4, 4)
                .field(field!(STARTUPINFOA, LPSTR, lpDesktop), 8, 4, 4)
                .field(field!(STARTUPINFOA, LPSTR, lpTitle), 12, 4, 4)
                .field(field!(STARTUPINFOA, DWORD, dwX), 16, 4, 4)
                .field(field!(STARTUPINFOA, DWORD, dwY), 20, 4, 4)
                .field(field!(STARTUPINFOA, DWORD, dwXSize), 24, 4, 4)
                .field(field!(STARTUPINFOA, DWORD, dwYSize), 28, 4, 4)
                .field(field!(STARTUPINFOA, DWORD, dwXCountChars), 32, 4, 4)
                .field(field!(STARTUPINFOA, DWORD, dwYCountChars), 36, 4, 4)
                .field(field!(STARTUPINFOA, DWORD, dwFillAttribute), 40, 4, 4)
                .field(field!(STARTUPINFOA, DWORD, dwFlags), 44, 4, 4)
                .field(field!(STARTUPINFOA, WORD, wShowWindow), 48, 2, 2)
                .field(field!(STARTUPINFOA, WORD, cbReserved2), 50, 2, 2)
                .field(field!(STARTUPINFOA, LPBYTE, lpReserved2), 52, 4, 4)
                .field(field!(STARTUPINFOA, HANDLE, hStdInput), 56, 4, 4)
                .field(field!(STARTUPINFOA, HANDLE, hStdOutput), 60, 4, 4)
                .field(field!(STARTUPINFOA, HANDLE, hStdError), 64, 4, 4)
        })
        .section("STARTUPINFOW", |s| {
            s.packing(4)
                .size_align::<STARTUPINFOW>(68, 4)
                .field(field!(STARTUPINFOW, DWORD, cb), 0, 4, 4)
                .field(field!(STARTUPINFOW, LPWSTR, lpReserved), 4, 4, 4)
                .field(field!(STARTUPINFOW, LPWSTR, lpDesktop), 8, 4, 4)
                .field(field!(STARTUPINFOW, LPWSTR, lpTitle), 12, 4, 4)
                .field(field!(STARTUPINFOW, DWORD, dwX), 16, 4, 4)
                .field(field!(STARTUPINFOW, DWORD, dwY), 20, 4, 4)
                .field(field!(STARTUPINFOW, DWORD, dwXSize), 24, 4, 4)
                .field(field!(STARTUPINFOW, DWORD, dwYSize), 28, 4, 4)
                .field(field!(STARTUPINFOW, DWORD, dwXCountChars), 32, 4, 4)
                .field(field!(STARTUPINFOW, DWORD, dwYCountChars), 36, 4, 4)
                .field(field!(STARTUPINFOW, DWORD, dwFillAttribute), 40, 4, 4)
                .field(field!(STARTUPINFOW, DWORD, dwFlags), 44, 4, 4)
                .field(field!(STARTUPINFOW, WORD, wShowWindow), 48, 2, 2)
                .field(field!(STARTUPINFOW, WORD, cbReserved2), 50, 2, 2)
                .field(field!(STARTUPINFOW, LPBYTE, lpReserved2), 52, 4, 4)
                .field(field!(STARTUPINFOW, HANDLE, hStdInput), 56, 4, 4)
                .field(field!(STARTUPINFOW, HANDLE, hStdOutput), 60, 4, 4)
                .field(field!(STARTUPINFOW, HANDLE, hStdError), 64, 4, 4)
        })
        .section("SYSTEMTIME", |s| {
            s.packing(4)
                .size_align::<SYSTEMTIME>(16, 2)
                .field(field!(SYSTEMTIME, WORD, wYear), 0, 2, 2)
                .field(field!(SYSTEMTIME, WORD, wMonth), 2, 2, 2)
                .field(field!(SYSTEMTIME, WORD, wDayOfWeek), 4, 2, 2)
                .field(field!(SYSTEMTIME, WORD, wDay), 6, 2, 2)
                .field(field!(SYSTEMTIME, WORD, wHour), 8, 2, 2)
                .field(field!(SYSTEMTIME, WORD, wMinute), 10, 2, 2)
                .field(field!(SYSTEMTIME, WORD, wSecond), 12, 2, 2)
                .field(field!(SYSTEMTIME, WORD, wMilliseconds), 14, 2, 2)
        })
        .section("SYSTEM_POWER_STATUS", |s| {
            s.packing(4)
                .size_align::<SYSTEM_POWER_STATUS>(12, 4)
                .field(field!(SYSTEM_POWER_STATUS, BYTE, ACLineStatus), 0, 1, 1)
                .field(field!(SYSTEM_POWER_STATUS, BYTE, BatteryFlag), 1, 1, 1)
                .field(field!(SYSTEM_POWER_STATUS, BYTE, BatteryLifePercent), 2, 1, 1)
                .field(field!(SYSTEM_POWER_STATUS, BYTE, Reserved1), 3, 1, 1)
                .field(field!(SYSTEM_POWER_STATUS, DWORD, BatteryLifeTime), 4, 4, 4)
                .field(field!(SYSTEM_POWER_STATUS, DWORD, BatteryFullLifeTime), 8, 4, 4)
        })
        .section("TIME_ZONE_INFORMATION", |s| {
            s.packing(4)
                .size_align::<TIME_ZONE_INFORMATION>(172, 4)
                .field(field!(TIME_ZONE_INFORMATION, LONG, Bias), 0, 4, 4)
                .field(field!(TIME_ZONE_INFORMATION, [WCHAR; 32], StandardName), 4, 64, 2)
                .field(field!(TIME_ZONE_INFORMATION, SYSTEMTIME, StandardDate), 68, 16, 2)
                .field(field!(TIME_ZONE_INFORMATION, LONG, StandardBias), 84, 4, 4)
                .field(field!(TIME_ZONE_INFORMATION, [WCHAR; 32], DaylightName), 88, 64, 2)
                .field(field!(TIME_ZONE_INFORMATION, SYSTEMTIME, DaylightDate), 152, 16, 2)
                .field(field!(TIME_ZONE_INFORMATION, LONG, DaylightBias), 168, 4, 4)
        })
        .section("UNLOAD_DLL_DEBUG_INFO", |s| {
            s.packing(4)
                .size_align::<UNLOAD_DLL_DEBUG_INFO>(4, 4)
                .field(field!(UNLOAD_DLL_DEBUG_INFO, LPVOID, lpBaseOfDll), 0, 4, 4)
        })
        .opaque("WAITORTIMERCALLBACK")
        .section("WIN32_FILE_ATTRIBUTE_DATA", |s| {
            s.packing(4)
                .size_align::<WIN32_FILE_ATTRIBUTE_DATA>(36, 4)
                .field(field!(WIN32_FILE_ATTRIBUTE_DATA, DWORD, dwFileAttributes), 0, 4, 4)
                .field(field!(WIN32_FILE_ATTRIBUTE_DATA, FILETIME, ftCreationTime), 4, 8, 4)
                .field(field!(WIN32_FILE_ATTRIBUTE_DATA, FILETIME, ftLastAccessTime), 12, 8, 4)
                .field(field!(WIN32_FILE_ATTRIBUTE_DATA, FILETIME, ftLastWriteTime), 20, 8, 4)
                .field(field!(WIN32_FILE_ATTRIBUTE_DATA, DWORD, nFileSizeHigh), 28, 4, 4)
                .field(field!(WIN32_FILE_ATTRIBUTE_DATA, DWORD, nFileSizeLow), 32, 4, 4)
        })
        .section("WIN32_FIND_DATAA", |s| {
            s.packing(4)
                .size_align::<WIN32_FIND_DATAA>(320, 4)
                .field(field!(WIN32_FIND_DATAA, DWORD, dwFileAttributes), 0, 4, 4)
                .field(field!(WIN32_FIND_DATAA, FILETIME, ftCreationTime), 4, 8, 4)
                .field(field!(WIN32_FIND_DATAA, FILETIME, ftLastAccessTime), 12, 8, 4)
                .field(field!(WIN32_FIND_DATAA, FILETIME, ftLastWriteTime), 20, 8, 4)
                .field(field!(WIN32_FIND_DATAA, DWORD, nFileSizeHigh), 28, 4, 4)
                .field(field!(WIN32_FIND_DATAA, DWORD, nFileSizeLow), 32, 4, 4)
                .field(field!(WIN32_FIND_DATAA, DWORD, dwReserved0), 36, 4, 4)
                .field(field!(WIN32_FIND_DATAA, DWORD, dwReserved1), 40, 4, 4)
                .field(field!(WIN32_FIND_DATAA, [CHAR; MAX_PATH], cFileName), 44, 260, 1)
                .field(field!(WIN32_FIND_DATAA, [CHAR; 14], cAlternateFileName), 304, 14, 1)
        })
        .section("WIN32_FIND_DATAW", |s| {
            s.packing(4)
                .size_align::<WIN32_FIND_DATAW>(592, 4)
                .field(field!(WIN32_FIND_DATAW, DWORD, dwFileAttributes), 0, 4, 4)
                .field(field!(WIN32_FIND_DATAW, FILETIME, ftCreationTime), 4, 8, 4)
                .field(field!(WIN32_FIND_DATAW, FILETIME, ftLastAccessTime), 12, 8, 4)
                .field(field!(WIN32_FIND_DATAW, FILETIME, ftLastWriteTime), 20, 8, 4)
                .field(field!(WIN32_FIND_DATAW, DWORD, nFileSizeHigh), 28, 4, 4)
                .field(field!(WIN32_FIND_DATAW, DWORD, nFileSizeLow), 32, 4, 4)
                .field(field!(WIN32_FIND_DATAW, DWORD, dwReserved0), 36, 4, 4)
                .field(field!(WIN32_FIND_DATAW, DWORD, dwReserved1), 40, 4, 4)
                .field(field!(WIN32_FIND_DATAW, [WCHAR; MAX_PATH], cFileName), 44, 520, 2)
                .field(field!(WIN32_FIND_DATAW, [WCHAR; 14], cAlternateFileName), 564, 28, 2)
        })
        .build()
}
