//! Compile declarative mesh descriptions into packed vertex/index buffers and a list of render
//! commands.
//!
//! A description is a `mesh` made of typed `attribute` blocks and `indices`/`arrays` draw
//! commands. Compiling it yields a [CompiledMesh]:
//!
//! * one vertex [Buffer] holding every attribute block back to back (not interleaved)
//! * one index [Buffer] holding the concatenated indices of every indexed command
//! * the [Attribute] layout table, with the byte offset of each block
//! * the [RenderCommand] list, in declaration order
//!
//! Parsing the description's text format is left to the caller, who supplies either
//! [Events](Event) or generic markup [Tokens](Token). Turning a compiled mesh into GPU objects is
//! left to a [RenderDevice].
//!
//! ```
//! use meshpack::{Event, RenderCommand, Mode, IndexType};
//!
//! let mesh = meshpack::compile([
//!     Event::EnterMesh,
//!     Event::attribute(0, "float", 2, "0 0  1 0  0 1"),
//!     Event::indices("triangles", "ubyte", "0 1 2"),
//!     Event::ExitMesh,
//! ])?;
//!
//! assert_eq!(mesh.vertex_data().len(), 24);
//! assert_eq!(
//!     mesh.commands(),
//!     &[RenderCommand::Indexed { mode: Mode::Triangles, offset: 0, count: 3, index_type: IndexType::U8 }]
//! );
//! # Ok::<(), meshpack::Error>(())
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod buffer;
mod command;
mod compile;
pub mod error;
pub mod event;
pub mod format;
mod mesh;

pub use buffer::*;
pub use command::*;
pub use compile::*;
pub use error::*;
pub use event::*;
pub use format::*;
pub use mesh::*;
