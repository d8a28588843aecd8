//! Closed tables describing how textual values are laid out in binary buffers.
//!
//! # Component Type Codes
//!
//! Numeric kinds and index types carry the component type codes shared by OpenGL and
//! [glTF](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#accessor-data-types):
//!
//! - `5120`: i8
//! - `5121`: u8
//! - `5122`: i16
//! - `5123`: u16
//! - `5124`: i32 (OpenGL only; glTF has no i32)
//! - `5125`: u32
//! - `5126`: f32

mod attribute;
mod index;
mod mode;

pub use attribute::*;
pub use index::*;
pub use mode::*;

use std::{fmt::Display, str::FromStr};

use num_traits::{FromBytes, ToBytes};

use crate::Error;

/// The scalar type of a single vertex or index component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    F32,
    I32,
    U32,
    I16,
    U16,
    I8,
    U8,
}

impl NumericKind {
    /// Width of one component, in bytes.
    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            NumericKind::F32 => size_of::<f32>(),
            NumericKind::I32 => size_of::<i32>(),
            NumericKind::U32 => size_of::<u32>(),
            NumericKind::I16 => size_of::<i16>(),
            NumericKind::U16 => size_of::<u16>(),
            NumericKind::I8 => size_of::<i8>(),
            NumericKind::U8 => size_of::<u8>(),
        }
    }

    /// Whether textual values of this kind may carry a sign.
    pub const fn is_signed(self) -> bool {
        !matches!(self, NumericKind::U32 | NumericKind::U16 | NumericKind::U8)
    }

    pub const fn to_gl(self) -> u32 {
        match self {
            NumericKind::I8 => 5120,
            NumericKind::U8 => 5121,
            NumericKind::I16 => 5122,
            NumericKind::U16 => 5123,
            NumericKind::I32 => 5124,
            NumericKind::U32 => 5125,
            NumericKind::F32 => 5126,
        }
    }

    pub fn from_gl(val: u32) -> Result<Self, &'static str> {
        match val {
            5120 => Ok(NumericKind::I8),
            5121 => Ok(NumericKind::U8),
            5122 => Ok(NumericKind::I16),
            5123 => Ok(NumericKind::U16),
            5124 => Ok(NumericKind::I32),
            5125 => Ok(NumericKind::U32),
            5126 => Ok(NumericKind::F32),
            _ => Err("invalid NumericKind value"),
        }
    }

    /// Parse whitespace-separated `text` as values of this kind, appending their host-endian
    /// bytes to `out`. Returns the number of values appended.
    ///
    /// Nothing is appended if any token fails to parse.
    pub fn encode_into(self, text: &str, out: &mut Vec<u8>) -> Result<usize, Error> {
        match self {
            NumericKind::F32 => encode_tokens::<f32>(text, out),
            NumericKind::I32 => encode_tokens::<i32>(text, out),
            NumericKind::U32 => encode_tokens::<u32>(text, out),
            NumericKind::I16 => encode_tokens::<i16>(text, out),
            NumericKind::U16 => encode_tokens::<u16>(text, out),
            NumericKind::I8 => encode_tokens::<i8>(text, out),
            NumericKind::U8 => encode_tokens::<u8>(text, out),
        }
    }
}

impl Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NumericKind::F32 => "f32",
            NumericKind::I32 => "i32",
            NumericKind::U32 => "u32",
            NumericKind::I16 => "i16",
            NumericKind::U16 => "u16",
            NumericKind::I8 => "i8",
            NumericKind::U8 => "u8",
        })
    }
}

/// Split the text content of a block into value tokens.
///
/// Any run of whitespace (including `\r\n` and `\n`) separates tokens; empty tokens are discarded.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

fn encode_tokens<C: Component>(text: &str, out: &mut Vec<u8>) -> Result<usize, Error> {
    let start = out.len();
    let mut count = 0;
    for token in tokens(text) {
        match C::parse(token) {
            Ok(value) => out.extend_from_slice(value.to_ne_bytes().as_ref()),
            Err(e) => {
                out.truncate(start);
                return Err(e);
            }
        }
        count += 1;
    }
    Ok(count)
}

/// Rust types which can represent a single [NumericKind] component.
pub trait Component: Copy + FromStr + ToBytes + FromBytes + std::fmt::Debug + 'static {
    const KIND: NumericKind;

    /// Decode one host-endian component; `None` if `bytes` has the wrong length.
    fn from_ne_slice(bytes: &[u8]) -> Option<Self>;

    /// Parse a single textual token.
    fn parse(token: &str) -> Result<Self, Error> {
        let malformed = || Error::MalformedNumber {
            token: token.to_owned(),
            kind: Self::KIND,
        };
        // std accepts a leading '+' on unsigned integers
        if !Self::KIND.is_signed() && token.starts_with(['+', '-']) {
            return Err(malformed());
        }
        token.parse().map_err(|_| malformed())
    }
}

mod _impl_component {
    use num_traits::FromBytes;

    use super::{Component, NumericKind};

    macro_rules! impl_component {
        ($Target:ty: $kind:ident) => {
            const _: () = {
                // "size of type $Target == size of kind $kind"
                static_assertions::const_assert_eq!(
                    std::mem::size_of::<$Target>(),
                    NumericKind::$kind.size()
                );
                impl Component for $Target {
                    const KIND: NumericKind = NumericKind::$kind;

                    #[inline]
                    fn from_ne_slice(bytes: &[u8]) -> Option<Self> {
                        let bytes: [u8; std::mem::size_of::<$Target>()] = bytes.try_into().ok()?;
                        Some(<$Target as FromBytes>::from_ne_bytes(&bytes))
                    }
                }
            };
        };
    }

    impl_component!(f32: F32);
    impl_component!(i32: I32);
    impl_component!(u32: U32);
    impl_component!(i16: I16);
    impl_component!(u16: U16);
    impl_component!(i8: I8);
    impl_component!(u8: U8);
}
