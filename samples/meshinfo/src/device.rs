use std::convert::Infallible;

use meshpack::{Attribute, BufferType, IndexType, Mode, RenderDevice};

/// Handle to a buffer created by a [LogDevice].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BufferId(usize);

/// A [RenderDevice] which only logs the calls made against it.
#[derive(Debug, Default)]
pub struct LogDevice {
    buffers: usize,
    draws: usize,
}

impl LogDevice {
    #[inline]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RenderDevice for LogDevice {
    type Buffer = BufferId;
    type Error = Infallible;

    fn create_buffer(&mut self, target: BufferType, data: &[u8]) -> Result<BufferId, Infallible> {
        let id = BufferId(self.buffers);
        self.buffers += 1;
        tracing::info!(
            ?id,
            ?target,
            gl_target = target.to_gl(),
            bytes = data.len(),
            "create buffer"
        );
        Ok(id)
    }

    fn bind_attributes(
        &mut self,
        vertices: &BufferId,
        attributes: &[Attribute],
        indices: Option<&BufferId>,
    ) -> Result<(), Infallible> {
        for attr in attributes {
            tracing::info!(
                ?vertices,
                slot = attr.slot,
                components = attr.components,
                gl_type = attr.ty.kind().to_gl(),
                normalized = attr.ty.is_normalized(),
                stride = attr.stride(),
                offset = attr.offset,
                "bind attribute"
            );
        }
        tracing::info!(?indices, "bind index buffer");
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        _vertices: &BufferId,
        indices: &BufferId,
        mode: Mode,
        offset: usize,
        count: usize,
        index_type: IndexType,
    ) -> Result<(), Infallible> {
        self.draws += 1;
        tracing::info!(
            ?indices,
            mode = mode.to_gl(),
            count,
            index_type = index_type.to_gl(),
            offset,
            "draw elements"
        );
        Ok(())
    }

    fn draw_direct(
        &mut self,
        _vertices: &BufferId,
        mode: Mode,
        first: u32,
        count: u32,
    ) -> Result<(), Infallible> {
        self.draws += 1;
        tracing::info!(mode = mode.to_gl(), first, count, "draw arrays");
        Ok(())
    }
}
