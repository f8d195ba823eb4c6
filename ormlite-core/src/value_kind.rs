use std::fmt::{self, Display, Formatter};

/// Storage kind of a record field, drives both the codec and the generated column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Boolean,
    /// Enumeration stored as its underlying integer kind.
    Enum(&'static ValueKind),
    /// Fixed size byte buffer of the given length.
    FixedBuffer(usize),
    Text,
}

impl ValueKind {
    /// Whether literals of this kind are rendered between single quotes.
    pub fn is_quoted(&self) -> bool {
        matches!(self, ValueKind::Text | ValueKind::FixedBuffer(..))
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Int8 => f.write_str("Int8"),
            ValueKind::Int16 => f.write_str("Int16"),
            ValueKind::Int32 => f.write_str("Int32"),
            ValueKind::Int64 => f.write_str("Int64"),
            ValueKind::UInt8 => f.write_str("UInt8"),
            ValueKind::UInt16 => f.write_str("UInt16"),
            ValueKind::UInt32 => f.write_str("UInt32"),
            ValueKind::UInt64 => f.write_str("UInt64"),
            ValueKind::Float32 => f.write_str("Float32"),
            ValueKind::Float64 => f.write_str("Float64"),
            ValueKind::Boolean => f.write_str("Boolean"),
            ValueKind::Enum(inner) => write!(f, "Enum({})", inner),
            ValueKind::FixedBuffer(len) => write!(f, "FixedBuffer({})", len),
            ValueKind::Text => f.write_str("Text"),
        }
    }
}
