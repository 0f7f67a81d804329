// Thu Oct 15 2026 - Alex

use crate::layout::{FactKind, FactValue, Probe};
use bitflags::bitflags;

bitflags! {
    /// Optional measurements a layout source can perform.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        const TYPE_ALIGNMENT = 0b0000_0001;
        const FIELD_ALIGNMENT = 0b0000_0010;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Value(FactValue),
    NotApplicable,
}

/// Supplies measured layout facts for the checker.
pub trait LayoutSource: Send + Sync {
    fn name(&self) -> &str;

    fn capabilities(&self) -> Capabilities;

    fn measure(&self, kind: FactKind, probe: &Probe) -> Measurement;
}

/// Measures the definitions compiled into this binary.
#[derive(Debug, Clone, Copy)]
pub struct CompiledLayout {
    capabilities: Capabilities,
}

impl CompiledLayout {
    pub fn new() -> Self {
        Self { capabilities: Capabilities::all() }
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}

impl Default for CompiledLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutSource for CompiledLayout {
    fn name(&self) -> &str {
        "compiled"
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn measure(&self, kind: FactKind, probe: &Probe) -> Measurement {
        match kind.required_capability() {
            Some(required) if !self.capabilities.contains(required) => Measurement::NotApplicable,
            _ => Measurement::Value(probe.measure()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_layout_measures_everything_by_default() {
        let source = CompiledLayout::default();
        assert_eq!(source.capabilities(), Capabilities::all());
        assert_eq!(
            source.measure(FactKind::TypeAlignment, &Probe::align_of::<u64>()),
            Measurement::Value(FactValue::Bytes(std::mem::align_of::<u64>()))
        );
    }

    #[test]
    fn test_missing_capability_is_not_applicable() {
        let source = CompiledLayout::new().with_capabilities(Capabilities::FIELD_ALIGNMENT);
        assert_eq!(
            source.measure(FactKind::TypeAlignment, &Probe::align_of::<u32>()),
            Measurement::NotApplicable
        );
        assert_eq!(
            source.measure(FactKind::FieldAlignment, &Probe::align_of::<u32>()),
            Measurement::Value(FactValue::Bytes(4))
        );
        assert_eq!(
            source.measure(FactKind::TypeSize, &Probe::size_of::<u32>()),
            Measurement::Value(FactValue::Bytes(4))
        );
    }

    #[test]
    fn test_empty_capabilities_still_measure_sizes_and_offsets() {
        let source = CompiledLayout::new().with_capabilities(Capabilities::empty());
        assert_eq!(
            source.measure(FactKind::FieldAlignment, &Probe::align_of::<u16>()),
            Measurement::NotApplicable
        );
        assert_eq!(
            source.measure(FactKind::FieldOffset, &Probe::Bytes(|| 8)),
            Measurement::Value(FactValue::Bytes(8))
        );
    }
}
