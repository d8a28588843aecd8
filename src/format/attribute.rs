use std::{fmt::Display, str::FromStr};

use crate::{Error, NumericKind};

/// The declared type of a vertex attribute block.
///
/// Normalized types are integers that the device maps into `[0, 1]` (unsigned) or `[-1, 1]`
/// (signed) when the attribute is read by a shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Float,
    Int,
    Uint,
    NormInt,
    NormUint,
    Short,
    Ushort,
    NormShort,
    NormUshort,
    Byte,
    Ubyte,
    NormByte,
    NormUbyte,
}

impl AttributeType {
    /// Every attribute type, in table order.
    pub const ALL: [AttributeType; 13] = [
        AttributeType::Float,
        AttributeType::Int,
        AttributeType::Uint,
        AttributeType::NormInt,
        AttributeType::NormUint,
        AttributeType::Short,
        AttributeType::Ushort,
        AttributeType::NormShort,
        AttributeType::NormUshort,
        AttributeType::Byte,
        AttributeType::Ubyte,
        AttributeType::NormByte,
        AttributeType::NormUbyte,
    ];

    /// The name used for this type in mesh descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            AttributeType::Float => "float",
            AttributeType::Int => "int",
            AttributeType::Uint => "uint",
            AttributeType::NormInt => "norm-int",
            AttributeType::NormUint => "norm-uint",
            AttributeType::Short => "short",
            AttributeType::Ushort => "ushort",
            AttributeType::NormShort => "norm-short",
            AttributeType::NormUshort => "norm-ushort",
            AttributeType::Byte => "byte",
            AttributeType::Ubyte => "ubyte",
            AttributeType::NormByte => "norm-byte",
            AttributeType::NormUbyte => "norm-ubyte",
        }
    }

    pub const fn kind(self) -> NumericKind {
        match self {
            AttributeType::Float => NumericKind::F32,
            AttributeType::Int | AttributeType::NormInt => NumericKind::I32,
            AttributeType::Uint | AttributeType::NormUint => NumericKind::U32,
            AttributeType::Short | AttributeType::NormShort => NumericKind::I16,
            AttributeType::Ushort | AttributeType::NormUshort => NumericKind::U16,
            AttributeType::Byte | AttributeType::NormByte => NumericKind::I8,
            AttributeType::Ubyte | AttributeType::NormUbyte => NumericKind::U8,
        }
    }

    pub const fn is_normalized(self) -> bool {
        matches!(
            self,
            AttributeType::NormInt
                | AttributeType::NormUint
                | AttributeType::NormShort
                | AttributeType::NormUshort
                | AttributeType::NormByte
                | AttributeType::NormUbyte
        )
    }

    /// Width of one component, in bytes.
    #[inline]
    pub const fn size(self) -> usize {
        self.kind().size()
    }
}

impl FromStr for AttributeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeType::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| Error::UnsupportedType(s.to_owned()))
    }
}

impl Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
