// Thu Oct 15 2026 - Alex

use super::types::*;
use super::Ptr32;

/// Serial port control block. The flag bitfields (`fBinary` .. `fDummy2`)
/// share one `DWORD`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct DCB {
    pub DCBlength: DWORD,
    pub BaudRate: DWORD,
    pub Flags: DWORD,
    pub wReserved: WORD,
    pub XonLim: WORD,
    pub XoffLim: WORD,
    pub ByteSize: BYTE,
    pub Parity: BYTE,
    pub StopBits: BYTE,
    pub XonChar: CHAR,
    pub XoffChar: CHAR,
    pub ErrorChar: CHAR,
    pub EofChar: CHAR,
    pub EvtChar: CHAR,
    pub wReserved1: WORD,
}

pub type LPDCB = Ptr32<DCB>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct COMMCONFIG {
    pub dwSize: DWORD,
    pub wVersion: WORD,
    pub wReserved: WORD,
    pub dcb: DCB,
    pub dwProviderSubType: DWORD,
    pub dwProviderOffset: DWORD,
    pub dwProviderSize: DWORD,
    pub wcProviderData: [WCHAR; 1],
}

pub type LPCOMMCONFIG = Ptr32<COMMCONFIG>;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct COMMPROP {
    pub wPacketLength: WORD,
    pub wPacketVersion: WORD,
    pub dwServiceMask: DWORD,
    pub dwReserved1: DWORD,
    pub dwMaxTxQueue: DWORD,
    pub dwMaxRxQueue: DWORD,
    pub dwMaxBaud: DWORD,
    pub dwProvSubType: DWORD,
    pub dwProvCapabilities: DWORD,
    pub dwSettableParams: DWORD,
    pub dwSettableBaud: DWORD,
    pub wSettableData: WORD,
    pub wSettableStopParity: WORD,
    pub dwCurrentTxQueue: DWORD,
    pub dwCurrentRxQueue: DWORD,
    pub dwProvSpec1: DWORD,
    pub dwProvSpec2: DWORD,
    pub wcProvChar: [WCHAR; 1],
}

pub type LPCOMMPROP = Ptr32<COMMPROP>;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct COMMTIMEOUTS {
    pub ReadIntervalTimeout: DWORD,
    pub ReadTotalTimeoutMultiplier: DWORD,
    pub ReadTotalTimeoutConstant: DWORD,
    pub WriteTotalTimeoutMultiplier: DWORD,
    pub WriteTotalTimeoutConstant: DWORD,
}

pub type LPCOMMTIMEOUTS = Ptr32<COMMTIMEOUTS>;

/// `fCtsHold` .. `fReserved` bitfields live in `Status`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct COMSTAT {
    pub Status: DWORD,
    pub cbInQue: DWORD,
    pub cbOutQue: DWORD,
}

pub type LPCOMSTAT = Ptr32<COMSTAT>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_dcb_bitfields_take_one_dword() {
        assert_eq!(mem::size_of::<DCB>(), 28);
        assert_eq!(mem::offset_of!(DCB, wReserved), 12);
        assert_eq!(mem::offset_of!(COMMCONFIG, dcb), 8);
        assert_eq!(mem::size_of::<COMMCONFIG>(), 52);
    }
}
