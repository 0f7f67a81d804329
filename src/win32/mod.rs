// Thu Oct 15 2026 - Alex

//! 32-bit kernel32 structure definitions checked by the reference suites.
//!
//! Every pointer-sized member is a [`Ptr32`], so these reproduce the i386
//! layout on any host.

#![allow(non_camel_case_types, non_snake_case)]

pub mod comm;
pub mod debug;
pub mod file;
pub mod process;
pub mod ptr;
pub mod system;
pub mod types;

pub use comm::*;
pub use debug::*;
pub use file::*;
pub use process::*;
pub use ptr::Ptr32;
pub use system::*;
pub use types::*;
