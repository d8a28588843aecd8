use crate::NumericKind;

/// Errors produced while compiling a mesh description.
///
/// Every variant is terminal for the compile call that produced it; no partially built mesh is
/// ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("unsupported type: {0:?}")]
    UnsupportedType(String),
    #[error("unsupported primitive: {0:?}")]
    UnsupportedPrimitive(String),
    #[error("malformed {kind} value: {token:?}")]
    MalformedNumber { token: String, kind: NumericKind },
}

/// Structural problems with a mesh description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid tag: {0:?}")]
    InvalidTag(String),
    #[error("expected <mesh> as the root element, found {0}")]
    MissingRoot(String),
    #[error("unexpected <{found}> inside <{parent}>")]
    UnexpectedTag { parent: String, found: String },
    #[error("unexpected closing tag </{found}>, expected </{expected}>")]
    MismatchedClose { expected: String, found: String },
    #[error("unexpected text content inside <{0}>")]
    UnexpectedText(String),
    #[error("description ended before </mesh>")]
    UnexpectedEnd,
    #[error("content after </mesh>")]
    TrailingContent,
    #[error("<{tag}> is missing its {key:?} attribute")]
    MissingAttribute { tag: &'static str, key: &'static str },
    #[error("<{0}> has no values")]
    EmptyBlock(&'static str),
    #[error("attribute {0} declares zero components per vertex")]
    ZeroComponents(u32),
    #[error("there must be at least 1 set of attributes")]
    NoAttributes,
    #[error("there must be at least 1 render command")]
    NoCommands,
    #[error("attribute {slot} has {values} values, which is not a multiple of its {components} components")]
    PartialVertex {
        slot: u32,
        components: u32,
        values: usize,
    },
    #[error("attribute {slot} describes {found} vertices; previous attributes describe {expected}")]
    VertexCountMismatch {
        slot: u32,
        expected: usize,
        found: usize,
    },
    #[error("attribute slot {0} is declared more than once")]
    DuplicateSlot(u32),
}

/// Errors produced while handing a compiled mesh to a [RenderDevice](crate::RenderDevice).
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError<E: std::error::Error + 'static> {
    #[error("render command {0} is indexed, but no index buffer was supplied")]
    MissingIndexBuffer(usize),
    #[error("rendering device failed")]
    Device(#[source] E),
}
