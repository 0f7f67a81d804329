// Thu Oct 15 2026 - Alex

use crate::layout::Pointer;
use std::fmt;
use std::marker::PhantomData;

/// A pointer as the 32-bit kernel ABI lays it out: a 4-byte address.
///
/// Never dereferenced; it exists so structures embedding pointers keep their
/// 32-bit layout whatever the host pointer width is.
#[repr(transparent)]
pub struct Ptr32<T: ?Sized> {
    addr: u32,
    _marker: PhantomData<*const T>,
}

impl<T: ?Sized> Ptr32<T> {
    pub const fn null() -> Self {
        Self { addr: 0, _marker: PhantomData }
    }

    pub const fn from_addr(addr: u32) -> Self {
        Self { addr, _marker: PhantomData }
    }

    pub const fn addr(&self) -> u32 {
        self.addr
    }

    pub const fn is_null(&self) -> bool {
        self.addr == 0
    }
}

impl<T: ?Sized> Clone for Ptr32<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Ptr32<T> {}

impl<T: ?Sized> PartialEq for Ptr32<T> {
    fn eq(&self, other: &Self) -> bool {
        self.addr == other.addr
    }
}

impl<T: ?Sized> Eq for Ptr32<T> {}

impl<T: ?Sized> Default for Ptr32<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> fmt::Debug for Ptr32<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ptr32({:#010x})", self.addr)
    }
}

impl<T> Pointer for Ptr32<T> {
    type Pointee = T;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_ptr32_is_four_bytes_for_any_pointee() {
        assert_eq!(mem::size_of::<Ptr32<u8>>(), 4);
        assert_eq!(mem::size_of::<Ptr32<[u64; 32]>>(), 4);
        assert_eq!(mem::align_of::<Ptr32<u64>>(), 4);
        assert_eq!(mem::size_of::<<Ptr32<[u64; 32]> as Pointer>::Pointee>(), 256);
    }

    #[test]
    fn test_ptr32_address_handling() {
        let p: Ptr32<u32> = Ptr32::from_addr(0x7ffd_0000);
        assert_eq!(p.addr(), 0x7ffd_0000);
        assert!(!p.is_null());
        assert!(Ptr32::<u32>::default().is_null());
        assert_eq!(format!("{:?}", Ptr32::<u8>::from_addr(0x10)), "Ptr32(0x00000010)");
    }
}
