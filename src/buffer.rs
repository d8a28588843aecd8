use std::{ops::Deref, sync::Arc};

use crate::Component;

/// The intended GPU binding point of a [Buffer].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferType {
    /// Vertex attribute data.
    Array,
    /// Index data.
    ElementArray,
}

impl BufferType {
    pub const ALL: [BufferType; 2] = [BufferType::Array, BufferType::ElementArray];

    /// The OpenGL binding point (`GL_ARRAY_BUFFER` / `GL_ELEMENT_ARRAY_BUFFER`), also used as the
    /// glTF buffer view target.
    pub const fn to_gl(self) -> u32 {
        match self {
            BufferType::Array => 34962,
            BufferType::ElementArray => 34963,
        }
    }

    pub fn from_gl(val: u32) -> Result<Self, &'static str> {
        BufferType::ALL
            .into_iter()
            .find(|t| t.to_gl() == val)
            .ok_or("invalid buffer target")
    }
}

/// An append-only byte buffer under construction.
///
/// Every append reports the length of the buffer immediately before the new data, so offsets
/// handed out earlier stay valid however the backing storage grows.
#[derive(Debug)]
pub(crate) struct BufferBuilder {
    target: BufferType,
    data: Vec<u8>,
}

impl BufferBuilder {
    #[inline]
    pub(crate) fn new(target: BufferType) -> Self {
        Self {
            target,
            data: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Append raw bytes, returning the offset at which they were written.
    pub(crate) fn append(&mut self, bytes: &[u8]) -> usize {
        let offset = self.data.len();
        self.data.extend_from_slice(bytes);
        offset
    }

    /// Freeze the written bytes into an immutable, exactly-sized [Buffer].
    pub(crate) fn finish(self) -> Buffer {
        Buffer {
            target: self.target,
            data: self.data.into(),
        }
    }
}

/// An immutable data blob which can be sent to the GPU.
///
/// Cloning a `Buffer` shares the underlying bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    target: BufferType,
    data: Arc<[u8]>,
}

impl Buffer {
    #[inline]
    pub fn target(&self) -> BufferType {
        self.target
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Decode `count` host-endian values of type `C`, starting `offset` bytes into the buffer.
    ///
    /// Returns `None` if the requested range runs past the end of the buffer.
    pub fn read<C: Component>(&self, offset: usize, count: usize) -> Option<Vec<C>> {
        let size = C::KIND.size();
        let end = count.checked_mul(size)?.checked_add(offset)?;
        self.data
            .get(offset..end)?
            .chunks_exact(size)
            .map(C::from_ne_slice)
            .collect()
    }
}

impl Deref for Buffer {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Buffer {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
