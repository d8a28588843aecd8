//! The structural event contract between document parsers and the
//! [MeshCompiler](crate::MeshCompiler).
//!
//! A mesh description has the following shape; element and attribute names are fixed:
//!
//! * `mesh`: root element
//!   * `attribute`: one block of per-vertex values
//!     * `index`: attribute slot
//!     * `type`: [AttributeType](crate::AttributeType) name
//!     * `size`: components per vertex
//!     * text: whitespace-separated values
//!   * `indices`: an indexed render command
//!     * `cmd`: [Mode](crate::Mode) name
//!     * `type`: [IndexType](crate::IndexType) name
//!     * text: whitespace-separated indices
//!   * `arrays`: a direct render command
//!     * `cmd`: [Mode](crate::Mode) name
//!     * `start`: first vertex
//!     * `count`: vertex count
//!
//! Parsers which already understand this shape can produce [Events](Event) directly. Generic
//! parsers produce [Tokens](Token), which [Events] turns into [Events](Event).

mod tokens;
pub use tokens::*;

/// A declared block of vertex attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBlock {
    pub slot: u32,
    pub type_name: String,
    pub components: u32,
    pub text: String,
}

/// An indexed render command and its index values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicesBlock {
    pub mode_name: String,
    pub type_name: String,
    pub text: String,
}

/// A direct render command over a contiguous range of vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraysBlock {
    pub mode_name: String,
    pub first: u32,
    pub count: u32,
}

/// One structural event of a mesh description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    EnterMesh,
    Attribute(AttributeBlock),
    Indices(IndicesBlock),
    Arrays(ArraysBlock),
    ExitMesh,
}

impl Event {
    pub fn attribute(
        slot: u32,
        type_name: impl Into<String>,
        components: u32,
        text: impl Into<String>,
    ) -> Self {
        Self::Attribute(AttributeBlock {
            slot,
            type_name: type_name.into(),
            components,
            text: text.into(),
        })
    }

    pub fn indices(
        mode_name: impl Into<String>,
        type_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::Indices(IndicesBlock {
            mode_name: mode_name.into(),
            type_name: type_name.into(),
            text: text.into(),
        })
    }

    pub fn arrays(mode_name: impl Into<String>, first: u32, count: u32) -> Self {
        Self::Arrays(ArraysBlock {
            mode_name: mode_name.into(),
            first,
            count,
        })
    }

    /// The element name this event corresponds to.
    pub fn tag(&self) -> &'static str {
        match self {
            Event::EnterMesh | Event::ExitMesh => "mesh",
            Event::Attribute(_) => "attribute",
            Event::Indices(_) => "indices",
            Event::Arrays(_) => "arrays",
        }
    }
}
