//! Render commands and the device they are replayed against.

use crate::{Attribute, BufferType, ExecuteError, IndexType, Mode};

/// A single draw operation of a compiled mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderCommand {
    /// Draw `count` vertices referenced through the index buffer, starting `offset` bytes in.
    Indexed {
        mode: Mode,
        offset: usize,
        count: usize,
        index_type: IndexType,
    },
    /// Draw `count` consecutive vertices, starting at vertex `first`.
    Direct { mode: Mode, first: u32, count: u32 },
}

impl RenderCommand {
    #[inline]
    pub fn mode(&self) -> Mode {
        match *self {
            RenderCommand::Indexed { mode, .. } | RenderCommand::Direct { mode, .. } => mode,
        }
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        matches!(self, RenderCommand::Indexed { .. })
    }
}

/// The collaborator that owns GPU resources and issues draw calls.
///
/// `meshpack` never talks to a graphics API itself; implement this for whatever backend is in
/// use.
pub trait RenderDevice {
    /// Handle to a device-side buffer.
    type Buffer;
    type Error: std::error::Error + 'static;

    /// Upload `data` into a new device buffer bound for `target`.
    fn create_buffer(&mut self, target: BufferType, data: &[u8]) -> Result<Self::Buffer, Self::Error>;

    /// Describe how `attributes` are laid out within `vertices`.
    ///
    /// Each attribute occupies a tightly packed block starting at [Attribute::offset].
    fn bind_attributes(
        &mut self,
        vertices: &Self::Buffer,
        attributes: &[Attribute],
        indices: Option<&Self::Buffer>,
    ) -> Result<(), Self::Error> {
        let _ = (vertices, attributes, indices);
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        vertices: &Self::Buffer,
        indices: &Self::Buffer,
        mode: Mode,
        offset: usize,
        count: usize,
        index_type: IndexType,
    ) -> Result<(), Self::Error>;

    fn draw_direct(
        &mut self,
        vertices: &Self::Buffer,
        mode: Mode,
        first: u32,
        count: u32,
    ) -> Result<(), Self::Error>;
}

/// Issue one draw call per command, in order.
///
/// # Errors
///
/// * an indexed command is encountered and `indices` is `None`
/// * the device rejects a draw call; later commands are not issued
#[tracing::instrument(skip_all, fields(commands = commands.len()))]
pub fn execute<D: RenderDevice + ?Sized>(
    commands: &[RenderCommand],
    vertices: &D::Buffer,
    indices: Option<&D::Buffer>,
    device: &mut D,
) -> Result<(), ExecuteError<D::Error>> {
    for (i, cmd) in commands.iter().enumerate() {
        tracing::trace!(index = i, command = ?cmd, "issuing render command");
        match *cmd {
            RenderCommand::Indexed {
                mode,
                offset,
                count,
                index_type,
            } => {
                let indices = indices.ok_or(ExecuteError::MissingIndexBuffer(i))?;
                device.draw_indexed(vertices, indices, mode, offset, count, index_type)
            }
            RenderCommand::Direct { mode, first, count } => {
                device.draw_direct(vertices, mode, first, count)
            }
        }
        .map_err(ExecuteError::Device)?;
    }
    Ok(())
}

/// A [CompiledMesh](crate::CompiledMesh) whose buffers live on a [RenderDevice].
#[derive(Debug)]
pub struct UploadedMesh<B> {
    pub(crate) vertices: B,
    pub(crate) indices: Option<B>,
    pub(crate) commands: Vec<RenderCommand>,
}

impl<B> UploadedMesh<B> {
    #[inline]
    pub fn vertex_buffer(&self) -> &B {
        &self.vertices
    }

    #[inline]
    pub fn index_buffer(&self) -> Option<&B> {
        self.indices.as_ref()
    }

    #[inline]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// [Execute](execute) this mesh's render commands.
    pub fn render<D>(&self, device: &mut D) -> Result<(), ExecuteError<D::Error>>
    where
        D: RenderDevice<Buffer = B> + ?Sized,
    {
        execute(&self.commands, &self.vertices, self.indices.as_ref(), device)
    }
}
