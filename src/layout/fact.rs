// Thu Oct 15 2026 - Alex

use crate::layout::Capabilities;
use serde::Serialize;
use std::fmt;

/// The measurable properties of a compiled type or field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    TypeSize,
    TypeAlignment,
    FieldOffset,
    FieldAlignment,
    Signedness,
}

impl FactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactKind::TypeSize => "sizeof",
            FactKind::TypeAlignment => "TYPE_ALIGNMENT",
            FactKind::FieldOffset => "FIELD_OFFSET",
            FactKind::FieldAlignment => "FIELD_ALIGNMENT",
            FactKind::Signedness => "signedness",
        }
    }

    /// Capability a source needs before it can measure this kind.
    pub fn required_capability(&self) -> Option<Capabilities> {
        match self {
            FactKind::TypeAlignment => Some(Capabilities::TYPE_ALIGNMENT),
            FactKind::FieldAlignment => Some(Capabilities::FIELD_ALIGNMENT),
            _ => None,
        }
    }

    pub fn is_alignment(&self) -> bool {
        matches!(self, FactKind::TypeAlignment | FactKind::FieldAlignment)
    }
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signedness::Signed => f.write_str("signed"),
            Signedness::Unsigned => f.write_str("unsigned"),
        }
    }
}

/// A concrete fact value: a byte count for layout kinds, a sign for integral typedefs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FactValue {
    Bytes(usize),
    Sign(Signedness),
}

impl FactValue {
    pub fn as_bytes(&self) -> Option<usize> {
        match self {
            FactValue::Bytes(n) => Some(*n),
            FactValue::Sign(_) => None,
        }
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactValue::Bytes(n) => write!(f, "{}", n),
            FactValue::Sign(sign) => write!(f, "{}", sign),
        }
    }
}

/// What a fact is about.
///
/// `Pointee` is the dereferenced form of a pointer typedef and is checked
/// independently of the pointer itself. `Field` carries the nominal field type
/// so the field's own size can be checked apart from its placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "subject", rename_all = "snake_case")]
pub enum Subject {
    Type {
        name: &'static str,
    },
    Pointee {
        pointer: &'static str,
    },
    Field {
        owner: &'static str,
        field: &'static str,
        field_type: &'static str,
    },
}

impl Subject {
    /// Name of the table section this subject belongs to.
    pub fn section(&self) -> &'static str {
        match self {
            Subject::Type { name } => name,
            Subject::Pointee { pointer } => pointer,
            Subject::Field { owner, .. } => owner,
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            Subject::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Type { name } => write!(f, "{}", name),
            Subject::Pointee { pointer } => write!(f, "*{}", pointer),
            Subject::Field { owner, field, .. } => write!(f, "{}, {}", owner, field),
        }
    }
}
