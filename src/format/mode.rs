use std::{fmt::Display, str::FromStr};

use crate::Error;

/// The method by which vertices are interpreted as topological primitives.
///
/// Discriminants are the OpenGL / glTF mode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Points,
        Mode::Lines,
        Mode::LineLoop,
        Mode::LineStrip,
        Mode::Triangles,
        Mode::TriangleStrip,
        Mode::TriangleFan,
    ];

    /// The name used for this mode in mesh descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Points => "points",
            Mode::Lines => "lines",
            Mode::LineLoop => "line-loop",
            Mode::LineStrip => "line-strip",
            Mode::Triangles => "triangles",
            Mode::TriangleStrip => "tri-strip",
            Mode::TriangleFan => "tri-fan",
        }
    }

    #[inline]
    pub const fn to_gl(self) -> u32 {
        self as u32
    }

    pub fn from_gl(val: u32) -> Result<Self, &'static str> {
        Mode::ALL
            .into_iter()
            .find(|m| m.to_gl() == val)
            .ok_or("invalid Mode value")
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| Error::UnsupportedPrimitive(s.to_owned()))
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
