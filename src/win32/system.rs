// Thu Oct 15 2026 - Alex

use super::types::*;
use super::Ptr32;

pub const HW_PROFILE_GUIDLEN: usize = 39;
pub const MAX_PROFILE_LEN: usize = 80;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct MEMORYSTATUS {
    pub dwLength: DWORD,
    pub dwMemoryLoad: DWORD,
    pub dwTotalPhys: SIZE_T,
    pub dwAvailPhys: SIZE_T,
    pub dwTotalPageFile: SIZE_T,
    pub dwAvailPageFile: SIZE_T,
    pub dwTotalVirtual: SIZE_T,
    pub dwAvailVirtual: SIZE_T,
}

pub type LPMEMORYSTATUS = Ptr32<MEMORYSTATUS>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PROCESSOR_ARCHITECTURE_PARTS {
    pub wProcessorArchitecture: WORD,
    pub wReserved: WORD,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union SYSTEM_INFO_OEM {
    pub dwOemId: DWORD,
    pub s: PROCESSOR_ARCHITECTURE_PARTS,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SYSTEM_INFO {
    pub u: SYSTEM_INFO_OEM,
    pub dwPageSize: DWORD,
    pub lpMinimumApplicationAddress: LPVOID,
    pub lpMaximumApplicationAddress: LPVOID,
    pub dwActiveProcessorMask: DWORD_PTR,
    pub dwNumberOfProcessors: DWORD,
    pub dwProcessorType: DWORD,
    pub dwAllocationGranularity: DWORD,
    pub wProcessorLevel: WORD,
    pub wProcessorRevision: WORD,
}

pub type LPSYSTEM_INFO = Ptr32<SYSTEM_INFO>;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SYSTEM_POWER_STATUS {
    pub ACLineStatus: BYTE,
    pub BatteryFlag: BYTE,
    pub BatteryLifePercent: BYTE,
    pub Reserved1: BYTE,
    pub BatteryLifeTime: DWORD,
    pub BatteryFullLifeTime: DWORD,
}

pub type LPSYSTEM_POWER_STATUS = Ptr32<SYSTEM_POWER_STATUS>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct OSVERSIONINFOA {
    pub dwOSVersionInfoSize: DWORD,
    pub dwMajorVersion: DWORD,
    pub dwMinorVersion: DWORD,
    pub dwBuildNumber: DWORD,
    pub dwPlatformId: DWORD,
    pub szCSDVersion: [CHAR; 128],
}

pub type LPOSVERSIONINFOA = Ptr32<OSVERSIONINFOA>;
pub type POSVERSIONINFOA = Ptr32<OSVERSIONINFOA>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct OSVERSIONINFOW {
    pub dwOSVersionInfoSize: DWORD,
    pub dwMajorVersion: DWORD,
    pub dwMinorVersion: DWORD,
    pub dwBuildNumber: DWORD,
    pub dwPlatformId: DWORD,
    pub szCSDVersion: [WCHAR; 128],
}

pub type LPOSVERSIONINFOW = Ptr32<OSVERSIONINFOW>;
pub type POSVERSIONINFOW = Ptr32<OSVERSIONINFOW>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct OSVERSIONINFOEXA {
    pub dwOSVersionInfoSize: DWORD,
    pub dwMajorVersion: DWORD,
    pub dwMinorVersion: DWORD,
    pub dwBuildNumber: DWORD,
    pub dwPlatformId: DWORD,
    pub szCSDVersion: [CHAR; 128],
    pub wServicePackMajor: WORD,
    pub wServicePackMinor: WORD,
    pub wSuiteMask: WORD,
    pub wProductType: BYTE,
    pub wReserved: BYTE,
}

pub type LPOSVERSIONINFOEXA = Ptr32<OSVERSIONINFOEXA>;
pub type POSVERSIONINFOEXA = Ptr32<OSVERSIONINFOEXA>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct OSVERSIONINFOEXW {
    pub dwOSVersionInfoSize: DWORD,
    pub dwMajorVersion: DWORD,
    pub dwMinorVersion: DWORD,
    pub dwBuildNumber: DWORD,
    pub dwPlatformId: DWORD,
    pub szCSDVersion: [WCHAR; 128],
    pub wServicePackMajor: WORD,
    pub wServicePackMinor: WORD,
    pub wSuiteMask: WORD,
    pub wProductType: BYTE,
    pub wReserved: BYTE,
}

pub type LPOSVERSIONINFOEXW = Ptr32<OSVERSIONINFOEXW>;
pub type POSVERSIONINFOEXW = Ptr32<OSVERSIONINFOEXW>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HW_PROFILE_INFOA {
    pub dwDockInfo: DWORD,
    pub szHwProfileGuid: [CHAR; HW_PROFILE_GUIDLEN],
    pub szHwProfileName: [CHAR; MAX_PROFILE_LEN],
}

pub type LPHW_PROFILE_INFOA = Ptr32<HW_PROFILE_INFOA>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HW_PROFILE_INFOW {
    pub dwDockInfo: DWORD,
    pub szHwProfileGuid: [WCHAR; HW_PROFILE_GUIDLEN],
    pub szHwProfileName: [WCHAR; MAX_PROFILE_LEN],
}

pub type LPHW_PROFILE_INFOW = Ptr32<HW_PROFILE_INFOW>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TIME_ZONE_INFORMATION {
    pub Bias: LONG,
    pub StandardName: [WCHAR; 32],
    pub StandardDate: SYSTEMTIME,
    pub StandardBias: LONG,
    pub DaylightName: [WCHAR; 32],
    pub DaylightDate: SYSTEMTIME,
    pub DaylightBias: LONG,
}

pub type LPTIME_ZONE_INFORMATION = Ptr32<TIME_ZONE_INFORMATION>;
pub type PTIME_ZONE_INFORMATION = Ptr32<TIME_ZONE_INFORMATION>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LDT_ENTRY_BYTES {
    pub BaseMid: BYTE,
    pub Flags1: BYTE,
    pub Flags2: BYTE,
    pub BaseHi: BYTE,
}

/// `Bits` is a bitfield view over the same four bytes.
#[repr(C)]
#[derive(Clone, Copy)]
pub union LDT_ENTRY_HIGH_WORD {
    pub Bytes: LDT_ENTRY_BYTES,
    pub Bits: DWORD,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct LDT_ENTRY {
    pub LimitLow: WORD,
    pub BaseLow: WORD,
    pub HighWord: LDT_ENTRY_HIGH_WORD,
}

pub type LPLDT_ENTRY = Ptr32<LDT_ENTRY>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_profile_info_tail_padding() {
        assert_eq!(mem::offset_of!(HW_PROFILE_INFOA, szHwProfileName), 43);
        assert_eq!(mem::size_of::<HW_PROFILE_INFOA>(), 124);
        assert_eq!(mem::size_of::<HW_PROFILE_INFOW>(), 244);
    }

    #[test]
    fn test_version_info_extensions() {
        assert_eq!(mem::size_of::<OSVERSIONINFOEXA>(), 156);
        assert_eq!(mem::size_of::<OSVERSIONINFOEXW>(), 284);
        assert_eq!(mem::size_of::<SYSTEM_INFO>(), 36);
        assert_eq!(mem::size_of::<LDT_ENTRY>(), 8);
    }
}
