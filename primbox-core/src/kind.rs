//! The closed set of primitive value kinds.

use core::fmt;
use core::str::FromStr;

use crate::{ParseKindError, TypeDescriptor, well_known};

/// One of the eight primitive value kinds.
///
/// The set is closed: `void` is deliberately not a member, since it has no
/// values and therefore nothing to box (see [`TypeKind::Void`](crate::TypeKind::Void)).
///
/// The discriminants are dense and start at zero, so a kind doubles as an
/// index into [`BoxingTable`](crate::BoxingTable).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PrimitiveKind {
    /// `boolean`
    #[cfg_attr(feature = "serde", serde(rename = "boolean"))]
    Boolean = 0,
    /// `byte`, signed 8-bit
    #[cfg_attr(feature = "serde", serde(rename = "byte"))]
    Byte = 1,
    /// `short`, signed 16-bit
    #[cfg_attr(feature = "serde", serde(rename = "short"))]
    Short = 2,
    /// `char`, unsigned 16-bit code unit
    #[cfg_attr(feature = "serde", serde(rename = "char"))]
    Character = 3,
    /// `int`, signed 32-bit
    #[cfg_attr(feature = "serde", serde(rename = "int"))]
    Integer = 4,
    /// `long`, signed 64-bit
    #[cfg_attr(feature = "serde", serde(rename = "long"))]
    Long = 5,
    /// `float`, IEEE 754 binary32
    #[cfg_attr(feature = "serde", serde(rename = "float"))]
    Float = 6,
    /// `double`, IEEE 754 binary64
    #[cfg_attr(feature = "serde", serde(rename = "double"))]
    Double = 7,
}

impl PrimitiveKind {
    /// Number of primitive kinds.
    pub const COUNT: usize = 8;

    /// Every primitive kind, in discriminant order.
    pub const ALL: [PrimitiveKind; Self::COUNT] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Character,
        PrimitiveKind::Integer,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Position of this kind in [`PrimitiveKind::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The source-level keyword naming this kind, e.g. `int` or `char`.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Character => "char",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// The single-letter field descriptor used in class files (`I` for `int`, `J` for `long`, ...).
    pub const fn descriptor_char(self) -> char {
        match self {
            PrimitiveKind::Boolean => 'Z',
            PrimitiveKind::Byte => 'B',
            PrimitiveKind::Short => 'S',
            PrimitiveKind::Character => 'C',
            PrimitiveKind::Integer => 'I',
            PrimitiveKind::Long => 'J',
            PrimitiveKind::Float => 'F',
            PrimitiveKind::Double => 'D',
        }
    }

    /// Inverse of [`PrimitiveKind::descriptor_char`].
    pub const fn from_descriptor_char(c: char) -> Option<Self> {
        Some(match c {
            'Z' => PrimitiveKind::Boolean,
            'B' => PrimitiveKind::Byte,
            'S' => PrimitiveKind::Short,
            'C' => PrimitiveKind::Character,
            'I' => PrimitiveKind::Integer,
            'J' => PrimitiveKind::Long,
            'F' => PrimitiveKind::Float,
            'D' => PrimitiveKind::Double,
            _ => return None,
        })
    }

    /// Storage width of a value of this kind. `boolean` is reported as one byte.
    pub const fn size_in_bits(self) -> u32 {
        match self {
            PrimitiveKind::Boolean | PrimitiveKind::Byte => 8,
            PrimitiveKind::Short | PrimitiveKind::Character => 16,
            PrimitiveKind::Integer | PrimitiveKind::Float => 32,
            PrimitiveKind::Long | PrimitiveKind::Double => 64,
        }
    }

    /// Whether values of this kind are integral (`char` included).
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte
                | PrimitiveKind::Short
                | PrimitiveKind::Character
                | PrimitiveKind::Integer
                | PrimitiveKind::Long
        )
    }

    /// Whether values of this kind are floating point.
    pub const fn is_floating(self) -> bool {
        matches!(self, PrimitiveKind::Float | PrimitiveKind::Double)
    }

    /// The descriptor of the primitive type itself.
    pub const fn descriptor(self) -> &'static TypeDescriptor {
        use well_known::primitive;
        match self {
            PrimitiveKind::Boolean => primitive::BOOLEAN,
            PrimitiveKind::Byte => primitive::BYTE,
            PrimitiveKind::Short => primitive::SHORT,
            PrimitiveKind::Character => primitive::CHAR,
            PrimitiveKind::Integer => primitive::INT,
            PrimitiveKind::Long => primitive::LONG,
            PrimitiveKind::Float => primitive::FLOAT,
            PrimitiveKind::Double => primitive::DOUBLE,
        }
    }

    /// The descriptor of the canonical wrapper class for this kind.
    ///
    /// This is the single source the [`BoxingTable`](crate::BoxingTable) is built from;
    /// callers normally go through [`resolve_boxed`](crate::resolve_boxed) instead.
    pub const fn boxed_descriptor(self) -> &'static TypeDescriptor {
        use well_known::boxed;
        match self {
            PrimitiveKind::Boolean => boxed::BOOLEAN,
            PrimitiveKind::Byte => boxed::BYTE,
            PrimitiveKind::Short => boxed::SHORT,
            PrimitiveKind::Character => boxed::CHARACTER,
            PrimitiveKind::Integer => boxed::INTEGER,
            PrimitiveKind::Long => boxed::LONG,
            PrimitiveKind::Float => boxed::FLOAT,
            PrimitiveKind::Double => boxed::DOUBLE,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for PrimitiveKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.keyword() == s)
            .ok_or(ParseKindError::new())
    }
}
