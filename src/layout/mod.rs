// Thu Oct 15 2026 - Alex

pub mod alignment;
pub mod fact;
pub mod pointer;
pub mod probe;
pub mod provider;

pub use alignment::Alignment;
pub use fact::{FactKind, FactValue, Signedness, Subject};
pub use pointer::Pointer;
pub use probe::{field_alignment_of, signedness_of, FieldProbe, Integral, Probe};
pub use provider::{Capabilities, CompiledLayout, LayoutSource, Measurement};
