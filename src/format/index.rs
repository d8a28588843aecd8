use std::{fmt::Display, str::FromStr};

use crate::{Error, NumericKind};

/// The element type of an index block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    U8,
    U16,
    U32,
}

impl IndexType {
    pub const ALL: [IndexType; 3] = [IndexType::U8, IndexType::U16, IndexType::U32];

    /// The name used for this type in mesh descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            IndexType::U8 => "ubyte",
            IndexType::U16 => "ushort",
            IndexType::U32 => "uint",
        }
    }

    pub const fn kind(self) -> NumericKind {
        match self {
            IndexType::U8 => NumericKind::U8,
            IndexType::U16 => NumericKind::U16,
            IndexType::U32 => NumericKind::U32,
        }
    }

    /// Width of one index, in bytes.
    #[inline]
    pub const fn size(self) -> usize {
        self.kind().size()
    }

    #[inline]
    pub const fn to_gl(self) -> u32 {
        self.kind().to_gl()
    }
}

impl FromStr for IndexType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndexType::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| Error::UnsupportedType(s.to_owned()))
    }
}

impl Display for IndexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
