use crate::{
    AttributeType, Buffer, BufferType, ExecuteError, RenderCommand, RenderDevice, UploadedMesh,
};

/// Layout of one attribute block within a mesh's vertex buffer.
///
/// Blocks are not interleaved: the values of an attribute occupy `len` contiguous bytes starting
/// at `offset`, with no stride between vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Attribute slot (shader input location)
    pub slot: u32,
    /// Components per vertex
    pub components: u32,
    pub ty: AttributeType,
    /// Byte offset of the block within the vertex buffer
    pub offset: usize,
    /// Byte length of the block
    pub len: usize,
}

impl Attribute {
    /// Number of values in this block.
    #[inline]
    pub fn value_count(&self) -> usize {
        self.len / self.ty.size()
    }

    /// Number of whole vertices described by this block.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.value_count() / self.components as usize
    }

    /// Bytes between the starts of consecutive vertices.
    #[inline]
    pub fn stride(&self) -> usize {
        self.ty.size() * self.components as usize
    }
}

/// The result of compiling a mesh description: an attribute layout, a list of render commands,
/// and the two buffers they refer to.
///
/// A `CompiledMesh` always has at least one attribute and at least one render command.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledMesh {
    attributes: Vec<Attribute>,
    commands: Vec<RenderCommand>,
    vertices: Buffer,
    indices: Buffer,
}

impl CompiledMesh {
    pub(crate) fn new(
        attributes: Vec<Attribute>,
        commands: Vec<RenderCommand>,
        vertices: Buffer,
        indices: Buffer,
    ) -> Self {
        debug_assert!(!attributes.is_empty());
        debug_assert!(!commands.is_empty());
        Self {
            attributes,
            commands,
            vertices,
            indices,
        }
    }

    /// Attribute layouts, in declaration order.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The first attribute declared for `slot`, if any.
    pub fn attribute(&self, slot: u32) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.slot == slot)
    }

    /// Render commands, in declaration order.
    #[inline]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    #[inline]
    pub fn vertex_data(&self) -> &Buffer {
        &self.vertices
    }

    /// Concatenated index data of every indexed command. Empty if there are none.
    #[inline]
    pub fn index_data(&self) -> &Buffer {
        &self.indices
    }

    #[inline]
    pub fn has_indices(&self) -> bool {
        !self.indices.is_empty()
    }

    /// The number of vertices described by every attribute, or `None` if attributes disagree.
    pub fn vertex_count(&self) -> Option<usize> {
        let mut counts = self.attributes.iter().map(Attribute::vertex_count);
        let first = counts.next()?;
        counts.all(|c| c == first).then_some(first)
    }

    /// Decode the values of the first attribute declared for `slot`.
    ///
    /// Returns `None` if there is no such attribute or if `C` doesn't match its numeric kind.
    pub fn read_attribute<C: crate::Component>(&self, slot: u32) -> Option<Vec<C>> {
        let attr = self.attribute(slot)?;
        if attr.ty.kind() != C::KIND {
            return None;
        }
        self.vertices.read(attr.offset, attr.value_count())
    }

    /// Create device buffers for this mesh and describe its attribute layout to `device`.
    ///
    /// An index buffer is only created if the mesh has index data.
    #[tracing::instrument(skip_all, fields(vertex_bytes = self.vertices.len(), index_bytes = self.indices.len()))]
    pub fn upload<D>(&self, device: &mut D) -> Result<UploadedMesh<D::Buffer>, ExecuteError<D::Error>>
    where
        D: RenderDevice + ?Sized,
    {
        let vertices = device
            .create_buffer(BufferType::Array, &self.vertices)
            .map_err(ExecuteError::Device)?;
        let indices = match self.has_indices() {
            true => Some(
                device
                    .create_buffer(BufferType::ElementArray, &self.indices)
                    .map_err(ExecuteError::Device)?,
            ),
            false => None,
        };
        device
            .bind_attributes(&vertices, &self.attributes, indices.as_ref())
            .map_err(ExecuteError::Device)?;
        tracing::debug!(attributes = self.attributes.len(), "uploaded mesh");
        Ok(UploadedMesh {
            vertices,
            indices,
            commands: self.commands.clone(),
        })
    }
}
