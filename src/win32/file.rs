// Thu Oct 15 2026 - Alex

use super::types::*;
use super::Ptr32;

pub const OFS_MAXPATHNAME: usize = 128;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BY_HANDLE_FILE_INFORMATION {
    pub dwFileAttributes: DWORD,
    pub ftCreationTime: FILETIME,
    pub ftLastAccessTime: FILETIME,
    pub ftLastWriteTime: FILETIME,
    pub dwVolumeSerialNumber: DWORD,
    pub nFileSizeHigh: DWORD,
    pub nFileSizeLow: DWORD,
    pub nNumberOfLinks: DWORD,
    pub nFileIndexHigh: DWORD,
    pub nFileIndexLow: DWORD,
}

pub type LPBY_HANDLE_FILE_INFORMATION = Ptr32<BY_HANDLE_FILE_INFORMATION>;
pub type PBY_HANDLE_FILE_INFORMATION = Ptr32<BY_HANDLE_FILE_INFORMATION>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WIN32_FILE_ATTRIBUTE_DATA {
    pub dwFileAttributes: DWORD,
    pub ftCreationTime: FILETIME,
    pub ftLastAccessTime: FILETIME,
    pub ftLastWriteTime: FILETIME,
    pub nFileSizeHigh: DWORD,
    pub nFileSizeLow: DWORD,
}

pub type LPWIN32_FILE_ATTRIBUTE_DATA = Ptr32<WIN32_FILE_ATTRIBUTE_DATA>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WIN32_FIND_DATAA {
    pub dwFileAttributes: DWORD,
    pub ftCreationTime: FILETIME,
    pub ftLastAccessTime: FILETIME,
    pub ftLastWriteTime: FILETIME,
    pub nFileSizeHigh: DWORD,
    pub nFileSizeLow: DWORD,
    pub dwReserved0: DWORD,
    pub dwReserved1: DWORD,
    pub cFileName: [CHAR; MAX_PATH],
    pub cAlternateFileName: [CHAR; 14],
}

pub type LPWIN32_FIND_DATAA = Ptr32<WIN32_FIND_DATAA>;
pub type PWIN32_FIND_DATAA = Ptr32<WIN32_FIND_DATAA>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WIN32_FIND_DATAW {
    pub dwFileAttributes: DWORD,
    pub ftCreationTime: FILETIME,
    pub ftLastAccessTime: FILETIME,
    pub ftLastWriteTime: FILETIME,
    pub nFileSizeHigh: DWORD,
    pub nFileSizeLow: DWORD,
    pub dwReserved0: DWORD,
    pub dwReserved1: DWORD,
    pub cFileName: [WCHAR; MAX_PATH],
    pub cAlternateFileName: [WCHAR; 14],
}

pub type LPWIN32_FIND_DATAW = Ptr32<WIN32_FIND_DATAW>;
pub type PWIN32_FIND_DATAW = Ptr32<WIN32_FIND_DATAW>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct OFSTRUCT {
    pub cBytes: BYTE,
    pub fFixedDisk: BYTE,
    pub nErrCode: WORD,
    pub Reserved1: WORD,
    pub Reserved2: WORD,
    pub szPathName: [BYTE; OFS_MAXPATHNAME],
}

pub type LPOFSTRUCT = Ptr32<OFSTRUCT>;
pub type POFSTRUCT = Ptr32<OFSTRUCT>;

/// Backup stream header. The only kernel32 structure here that relies on its
/// 4-byte packing: `Size` would otherwise pull the alignment up to 8.
#[repr(C, packed(4))]
#[derive(Clone, Copy)]
pub struct WIN32_STREAM_ID {
    pub dwStreamId: DWORD,
    pub dwStreamAttributes: DWORD,
    pub Size: LARGE_INTEGER,
    pub dwStreamNameSize: DWORD,
    pub cStreamName: [WCHAR; ANYSIZE_ARRAY],
}

pub type LPWIN32_STREAM_ID = Ptr32<WIN32_STREAM_ID>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct OVERLAPPED {
    pub Internal: DWORD,
    pub InternalHigh: DWORD,
    pub Offset: DWORD,
    pub OffsetHigh: DWORD,
    pub hEvent: HANDLE,
}

pub type LPOVERLAPPED = Ptr32<OVERLAPPED>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_stream_id_packing() {
        assert_eq!(mem::size_of::<WIN32_STREAM_ID>(), 24);
        assert_eq!(mem::align_of::<WIN32_STREAM_ID>(), 4);
        assert_eq!(mem::offset_of!(WIN32_STREAM_ID, Size), 8);
        assert_eq!(mem::offset_of!(WIN32_STREAM_ID, cStreamName), 20);
    }

    #[test]
    fn test_find_data_tail_padding() {
        assert_eq!(mem::offset_of!(WIN32_FIND_DATAA, cAlternateFileName), 304);
        assert_eq!(mem::size_of::<WIN32_FIND_DATAA>(), 320);
        assert_eq!(mem::size_of::<WIN32_FIND_DATAW>(), 592);
    }
}
