//! Primitive-kind labels for mock targets.
//!
//! `FieldKind` is the label the directive parser checks `type(...)` and
//! `value(...)` arguments against. Every [`Mockable`](crate::Mockable)
//! reports one.

use std::fmt;

/// Primitive kind of a mock target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Boolean
    Bool,

    // Signed integers
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// Pointer-sized signed integer
    Isize,

    // Unsigned integers
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// Pointer-sized unsigned integer
    Usize,

    // Floating point
    /// 32-bit IEEE 754 floating point
    F32,
    /// 64-bit IEEE 754 floating point
    F64,

    /// Owned UTF-8 string
    String,

    // Containers
    /// Growable sequence (`Vec<T>`)
    Sequence,
    /// Fixed-size array (`[T; N]`)
    Array,
    /// Associative map
    Map,
    /// Struct-like aggregate described by a [`Schema`](crate::Schema)
    Aggregate,

    /// Anything else, including indirections
    Other,
}

impl FieldKind {
    /// Whether this is one of the signed integer kinds.
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize
        )
    }

    /// Whether this is one of the unsigned integer kinds.
    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize
        )
    }

    /// Whether this is one of the floating point kinds.
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Whether the kind is a sequence, array or map.
    pub fn is_collection(self) -> bool {
        matches!(self, Self::Sequence | Self::Array | Self::Map)
    }

    /// Inclusive bounds of an integer kind.
    pub fn int_bounds(self) -> Option<(i128, i128)> {
        let bounds = match self {
            Self::I8 => (i8::MIN as i128, i8::MAX as i128),
            Self::I16 => (i16::MIN as i128, i16::MAX as i128),
            Self::I32 => (i32::MIN as i128, i32::MAX as i128),
            Self::I64 => (i64::MIN as i128, i64::MAX as i128),
            Self::Isize => (isize::MIN as i128, isize::MAX as i128),
            Self::U8 => (0, u8::MAX as i128),
            Self::U16 => (0, u16::MAX as i128),
            Self::U32 => (0, u32::MAX as i128),
            Self::U64 => (0, u64::MAX as i128),
            Self::Usize => (0, usize::MAX as i128),
            _ => return None,
        };
        Some(bounds)
    }

    /// Label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
            Self::Sequence => "sequence",
            Self::Array => "array",
            Self::Map => "map",
            Self::Aggregate => "aggregate",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
