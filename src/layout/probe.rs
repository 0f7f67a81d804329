// Thu Oct 15 2026 - Alex

use crate::layout::{Alignment, FactValue, Pointer, Signedness};
use num_traits::{One, WrappingSub, Zero};
use std::mem;

/// Integral types whose sign can be probed the way C does it: `(T)-1 < 0`.
pub trait Integral: Zero + One + WrappingSub + PartialOrd {}

impl<T> Integral for T where T: Zero + One + WrappingSub + PartialOrd {}

pub fn signedness_of<T: Integral>() -> Signedness {
    if T::zero().wrapping_sub(&T::one()) < T::zero() {
        Signedness::Signed
    } else {
        Signedness::Unsigned
    }
}

/// Alignment `field` actually gets inside `Owner`.
///
/// The owner's alignment is the maximum of its fields' effective alignments
/// and never exceeds its packing, so capping the field type's natural
/// alignment by the owner's gives `min(natural, packing)` for both `repr(C)`
/// and `repr(C, packed(N))` aggregates.
pub fn field_alignment_of<Owner, Field>() -> usize {
    Alignment::of::<Field>().min(Alignment::of::<Owner>()).as_usize()
}

/// A deferred measurement of one fact against the compiled definitions.
///
/// Holding a function instead of a value keeps every run a fresh measurement.
#[derive(Debug, Clone, Copy)]
pub enum Probe {
    Bytes(fn() -> usize),
    Sign(fn() -> Signedness),
}

impl Probe {
    pub fn size_of<T>() -> Self {
        Probe::Bytes(mem::size_of::<T>)
    }

    pub fn align_of<T>() -> Self {
        Probe::Bytes(mem::align_of::<T>)
    }

    pub fn pointee_size_of<P: Pointer>() -> Self {
        Probe::Bytes(mem::size_of::<P::Pointee>)
    }

    pub fn pointee_align_of<P: Pointer>() -> Self {
        Probe::Bytes(mem::align_of::<P::Pointee>)
    }

    pub fn field_align_of<Owner, Field>() -> Self {
        Probe::Bytes(field_alignment_of::<Owner, Field>)
    }

    pub fn signedness_of<T: Integral>() -> Self {
        Probe::Sign(signedness_of::<T>)
    }

    pub fn measure(&self) -> FactValue {
        match self {
            Probe::Bytes(f) => FactValue::Bytes(f()),
            Probe::Sign(f) => FactValue::Sign(f()),
        }
    }
}

/// Everything needed to measure one field: built by the `field!` macro.
#[derive(Debug, Clone, Copy)]
pub struct FieldProbe {
    pub owner: &'static str,
    pub field: &'static str,
    pub field_type: &'static str,
    pub offset: Probe,
    pub size: Probe,
    pub alignment: Probe,
}

impl FieldProbe {
    #[doc(hidden)]
    pub fn new<Owner, Field>(
        owner: &'static str,
        field: &'static str,
        field_type: &'static str,
        offset: fn() -> usize,
    ) -> Self {
        Self {
            owner,
            field,
            field_type,
            offset: Probe::Bytes(offset),
            size: Probe::size_of::<Field>(),
            alignment: Probe::field_align_of::<Owner, Field>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::win32::Ptr32;

    #[allow(dead_code)]
    #[repr(C, packed(2))]
    struct Packed2 {
        tag: u16,
        value: u32,
    }

    #[allow(dead_code)]
    #[repr(C)]
    struct Natural {
        tag: u16,
        value: u32,
    }

    #[allow(dead_code)]
    #[repr(C)]
    struct Eight {
        lo: u32,
        hi: u32,
    }

    #[allow(dead_code)]
    #[repr(C)]
    struct Twelve {
        a: u32,
        b: u32,
        c: u32,
    }

    #[test]
    fn test_packed_field_reports_effective_alignment() {
        let probe = crate::field!(Packed2, u32, value);
        assert_eq!(probe.alignment.measure(), FactValue::Bytes(2));
        assert_eq!(probe.offset.measure(), FactValue::Bytes(2));
        assert_eq!(probe.size.measure(), FactValue::Bytes(4));
        assert_eq!(Probe::size_of::<Packed2>().measure(), FactValue::Bytes(6));
        assert_eq!(Probe::align_of::<Packed2>().measure(), FactValue::Bytes(2));
    }

    #[test]
    fn test_natural_field_keeps_its_alignment() {
        let probe = crate::field!(Natural, u32, value);
        assert_eq!(probe.alignment.measure(), FactValue::Bytes(4));
        assert_eq!(probe.offset.measure(), FactValue::Bytes(4));

        let tag = crate::field!(Natural, u16, tag);
        assert_eq!(tag.alignment.measure(), FactValue::Bytes(2));
        assert_eq!(tag.owner, "Natural");
        assert_eq!(tag.field, "tag");
        assert_eq!(tag.field_type, "u16");
    }

    #[test]
    fn test_pointer_width_is_independent_of_pointee() {
        assert_eq!(Probe::size_of::<Ptr32<Eight>>().measure(), FactValue::Bytes(4));
        assert_eq!(Probe::size_of::<Ptr32<Twelve>>().measure(), FactValue::Bytes(4));
        assert_eq!(Probe::pointee_size_of::<Ptr32<Eight>>().measure(), FactValue::Bytes(8));
        assert_eq!(Probe::pointee_size_of::<Ptr32<Twelve>>().measure(), FactValue::Bytes(12));

        let host = mem::size_of::<usize>();
        assert_eq!(Probe::size_of::<*const Eight>().measure(), FactValue::Bytes(host));
        assert_eq!(Probe::size_of::<*const Twelve>().measure(), FactValue::Bytes(host));
        assert_eq!(Probe::pointee_size_of::<*const Twelve>().measure(), FactValue::Bytes(12));
    }

    #[test]
    fn test_signedness_follows_minus_one() {
        assert_eq!(signedness_of::<i32>(), Signedness::Signed);
        assert_eq!(signedness_of::<i8>(), Signedness::Signed);
        assert_eq!(signedness_of::<u32>(), Signedness::Unsigned);
        assert_eq!(signedness_of::<u16>(), Signedness::Unsigned);
        assert_eq!(Probe::signedness_of::<i64>().measure(), FactValue::Sign(Signedness::Signed));
    }
}
