use crate::{
    buffer::BufferBuilder, ArraysBlock, Attribute, AttributeBlock, AttributeType, BufferType,
    CompiledMesh, Error, Event, Events, FormatError, IndexType, IndicesBlock, Mode, RenderCommand,
    Token,
};

/// Validation policy for [MeshCompiler].
///
/// A disabled check is still evaluated; violations are logged as warnings instead of failing the
/// compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompileOptions {
    /// Every attribute block must hold a whole number of vertices.
    pub require_whole_vertices: bool,
    /// Every attribute block must hold the same number of vertices.
    pub require_uniform_vertex_count: bool,
    /// No two attribute blocks may share a slot.
    pub require_unique_slots: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            require_whole_vertices: true,
            require_uniform_vertex_count: true,
            require_unique_slots: false,
        }
    }
}

impl CompileOptions {
    /// Accept anything that can be laid out, however inconsistent.
    pub const fn lenient() -> Self {
        Self {
            require_whole_vertices: false,
            require_uniform_vertex_count: false,
            require_unique_slots: false,
        }
    }

    /// Enable every check.
    pub const fn strict() -> Self {
        Self {
            require_whole_vertices: true,
            require_uniform_vertex_count: true,
            require_unique_slots: true,
        }
    }

    pub const fn with_whole_vertices(mut self, require: bool) -> Self {
        self.require_whole_vertices = require;
        self
    }

    pub const fn with_uniform_vertex_count(mut self, require: bool) -> Self {
        self.require_uniform_vertex_count = require;
        self
    }

    pub const fn with_unique_slots(mut self, require: bool) -> Self {
        self.require_unique_slots = require;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Root,
    Mesh,
    Done,
}

/// Incrementally builds a [CompiledMesh] from a stream of [Events](Event).
///
/// [push](Self::push) either applies an event completely or leaves the compiler untouched.
#[derive(Debug)]
pub struct MeshCompiler {
    options: CompileOptions,
    stage: Stage,
    attributes: Vec<Attribute>,
    commands: Vec<RenderCommand>,
    vertices: BufferBuilder,
    indices: BufferBuilder,
    /// Scratch space for the block currently being encoded
    scratch: Vec<u8>,
}

impl Default for MeshCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshCompiler {
    pub fn new() -> Self {
        Self::with_options(CompileOptions::default())
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            options,
            stage: Stage::Root,
            attributes: Vec::new(),
            commands: Vec::new(),
            vertices: BufferBuilder::new(BufferType::Array),
            indices: BufferBuilder::new(BufferType::ElementArray),
            scratch: Vec::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Apply a single event.
    pub fn push(&mut self, event: Event) -> Result<(), Error> {
        match (self.stage, event) {
            (Stage::Root, Event::EnterMesh) => {
                self.stage = Stage::Mesh;
                Ok(())
            }
            (Stage::Root, other) => {
                Err(FormatError::MissingRoot(match other {
                    Event::ExitMesh => "</mesh>".to_owned(),
                    _ => format!("<{}>", other.tag()),
                })
                .into())
            }
            (Stage::Mesh, Event::EnterMesh) => Err(FormatError::UnexpectedTag {
                parent: "mesh".to_owned(),
                found: "mesh".to_owned(),
            }
            .into()),
            (Stage::Mesh, Event::Attribute(block)) => self.push_attribute(block),
            (Stage::Mesh, Event::Indices(block)) => self.push_indices(block),
            (Stage::Mesh, Event::Arrays(block)) => self.push_arrays(block),
            (Stage::Mesh, Event::ExitMesh) => {
                self.stage = Stage::Done;
                Ok(())
            }
            (Stage::Done, _) => Err(FormatError::TrailingContent.into()),
        }
    }

    fn push_attribute(&mut self, block: AttributeBlock) -> Result<(), Error> {
        let ty: AttributeType = block.type_name.parse()?;
        if block.components == 0 {
            return Err(FormatError::ZeroComponents(block.slot).into());
        }
        if self.attributes.iter().any(|a| a.slot == block.slot) {
            if self.options.require_unique_slots {
                return Err(FormatError::DuplicateSlot(block.slot).into());
            }
            tracing::warn!(slot = block.slot, "attribute slot declared more than once");
        }

        self.scratch.clear();
        let values = ty.kind().encode_into(&block.text, &mut self.scratch)?;
        if values == 0 {
            return Err(FormatError::EmptyBlock("attribute").into());
        }

        let components = block.components as usize;
        if values % components != 0 {
            if self.options.require_whole_vertices {
                return Err(FormatError::PartialVertex {
                    slot: block.slot,
                    components: block.components,
                    values,
                }
                .into());
            }
            tracing::warn!(
                slot = block.slot,
                components,
                values,
                "attribute ends with a partial vertex"
            );
        }

        let vertices = values / components;
        if let Some(expected) = self.attributes.first().map(Attribute::vertex_count) {
            if expected != vertices {
                if self.options.require_uniform_vertex_count {
                    return Err(FormatError::VertexCountMismatch {
                        slot: block.slot,
                        expected,
                        found: vertices,
                    }
                    .into());
                }
                tracing::warn!(
                    slot = block.slot,
                    expected,
                    found = vertices,
                    "attribute vertex count differs from previous attributes"
                );
            }
        }

        let offset = self.vertices.append(&self.scratch);
        let attr = Attribute {
            slot: block.slot,
            components: block.components,
            ty,
            offset,
            len: self.scratch.len(),
        };
        tracing::debug!(
            slot = attr.slot,
            ty = attr.ty.name(),
            components = attr.components,
            offset = attr.offset,
            len = attr.len,
            "added attribute"
        );
        self.attributes.push(attr);
        Ok(())
    }

    fn push_indices(&mut self, block: IndicesBlock) -> Result<(), Error> {
        let mode: Mode = block.mode_name.parse()?;
        let index_type: IndexType = block.type_name.parse()?;

        self.scratch.clear();
        let count = index_type.kind().encode_into(&block.text, &mut self.scratch)?;
        if count == 0 {
            return Err(FormatError::EmptyBlock("indices").into());
        }

        let offset = self.indices.append(&self.scratch);
        tracing::debug!(
            mode = mode.name(),
            index_type = index_type.name(),
            offset,
            count,
            "added indexed render command"
        );
        self.commands.push(RenderCommand::Indexed {
            mode,
            offset,
            count,
            index_type,
        });
        Ok(())
    }

    fn push_arrays(&mut self, block: ArraysBlock) -> Result<(), Error> {
        let mode: Mode = block.mode_name.parse()?;
        tracing::debug!(
            mode = mode.name(),
            first = block.first,
            count = block.count,
            "added direct render command"
        );
        self.commands.push(RenderCommand::Direct {
            mode,
            first: block.first,
            count: block.count,
        });
        Ok(())
    }

    /// Validate the finished description and freeze its buffers.
    pub fn finish(self) -> Result<CompiledMesh, Error> {
        if self.stage != Stage::Done {
            return Err(FormatError::UnexpectedEnd.into());
        }
        if self.attributes.is_empty() {
            return Err(FormatError::NoAttributes.into());
        }
        if self.commands.is_empty() {
            return Err(FormatError::NoCommands.into());
        }
        tracing::debug!(
            attributes = self.attributes.len(),
            commands = self.commands.len(),
            vertex_bytes = self.vertices.len(),
            index_bytes = self.indices.len(),
            "compiled mesh"
        );
        Ok(CompiledMesh::new(
            self.attributes,
            self.commands,
            self.vertices.finish(),
            self.indices.finish(),
        ))
    }

    /// Apply every event of a description, then [finish](Self::finish).
    #[tracing::instrument(skip_all)]
    pub fn compile<I>(mut self, events: I) -> Result<CompiledMesh, Error>
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.push(event)?;
        }
        self.finish()
    }

    /// Adapt `tokens` into [Events](Event) and [compile](Self::compile) them.
    #[tracing::instrument(skip_all)]
    pub fn compile_tokens<I>(mut self, tokens: I) -> Result<CompiledMesh, Error>
    where
        I: IntoIterator<Item = Token>,
    {
        for event in Events::new(tokens) {
            self.push(event?)?;
        }
        self.finish()
    }
}

/// Compile a stream of [Events](Event) with the default [CompileOptions].
pub fn compile<I>(events: I) -> Result<CompiledMesh, Error>
where
    I: IntoIterator<Item = Event>,
{
    MeshCompiler::new().compile(events)
}

/// Compile a stream of [Tokens](Token) with the default [CompileOptions].
pub fn compile_tokens<I>(tokens: I) -> Result<CompiledMesh, Error>
where
    I: IntoIterator<Item = Token>,
{
    MeshCompiler::new().compile_tokens(tokens)
}
