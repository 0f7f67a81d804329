// Thu Oct 15 2026 - Alex

/// A type that designates another type through one level of indirection.
///
/// Size and alignment of the implementor are those of the pointer itself;
/// `Pointee` is what a dereferenced check measures.
pub trait Pointer {
    type Pointee;
}

impl<T> Pointer for *const T {
    type Pointee = T;
}
