// Thu Oct 15 2026 - Alex

/// Builds a [`FieldProbe`](crate::layout::FieldProbe) for `$field` of `$owner`.
///
/// Fails to compile unless `$field` exists on `$owner` with exactly the type
/// `$field_type`, so a table row can never drift from the definition it names.
///
/// ```ignore
/// let probe = field!(OVERLAPPED, HANDLE, hEvent);
/// ```
#[macro_export]
macro_rules! field {
    ($owner:ty, $field_type:ty, $field:ident) => {{
        #[allow(unused_unsafe)]
        let _: fn(*const $owner) -> *const $field_type =
            |p| unsafe { ::core::ptr::addr_of!((*p).$field) };
        $crate::layout::FieldProbe::new::<$owner, $field_type>(
            stringify!($owner),
            stringify!($field),
            stringify!($field_type),
            || ::core::mem::offset_of!($owner, $field),
        )
    }};
}
