use std::fmt;

/// An error encountered while encoding a WebAssembly construct.
///
/// None of these errors are transient: they all indicate that the input node
/// was malformed or uses something this crate has no encoding for. Callers
/// assembling a whole module are expected to abort on the first one.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl Error {
    /// Construct a new `Error` from an `ErrorKind`.
    pub fn new(kind: ErrorKind) -> Self {
        kind.into()
    }

    /// Construct an "unresolved index" error for the symbolic identifier `id`.
    pub fn unresolved_index(id: impl Into<String>) -> Self {
        ErrorKind::UnresolvedIndex(id.into()).into()
    }

    /// Construct an "unknown tag" error.
    pub fn unknown_tag(tag: TagKind, name: impl Into<String>) -> Self {
        ErrorKind::UnknownTag {
            tag,
            name: name.into(),
        }
        .into()
    }

    /// Construct an "unsupported import descriptor" error.
    pub fn unsupported_descriptor(kind: impl Into<String>) -> Self {
        ErrorKind::UnsupportedDescriptor(kind.into()).into()
    }

    /// Construct an "unsupported section" error.
    pub fn unsupported_section(section: impl Into<String>) -> Self {
        ErrorKind::UnsupportedSection(section.into()).into()
    }

    /// Get the kind of error that this is.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            kind: Box::new(kind),
        }
    }
}

/// The kind of error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An index still refers to a symbolic identifier instead of a number.
    #[error("unresolved index in emission: {0}")]
    UnresolvedIndex(String),

    /// A symbolic tag name has no entry in its lookup table.
    #[error("unknown {tag}: {name}")]
    UnknownTag {
        /// Which table was consulted.
        tag: TagKind,
        /// The name that was looked up.
        name: String,
    },

    /// An import descriptor kind that has no encoder.
    #[error("unsupported operation: encode module import of type: {0}")]
    UnsupportedDescriptor(String),

    /// A section that doesn't fit the `<id><size><count>` header grammar.
    #[error("unsupported section encoding of type {0}")]
    UnsupportedSection(String),

    /// The LEB128 codec refused to encode a value.
    #[error("failed to encode {0} as an unsigned LEB128")]
    Leb128(u32),

    /// A vector has more elements than a `u32` count can describe.
    #[error("vector of {0} elements is too long to encode")]
    VectorTooLong(usize),
}

/// The lookup table consulted for an [`ErrorKind::UnknownTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Value types such as `i32`.
    Valtype,
    /// Global mutability, `const` or `var`.
    Mutability,
    /// Section names such as `import`.
    Section,
    /// Export kinds such as `Func`.
    ExportKind,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TagKind::Valtype => "valtype",
            TagKind::Mutability => "mutability",
            TagKind::Section => "section",
            TagKind::ExportKind => "export kind",
        })
    }
}

/// A `Result` type that is either `Ok(T)` or `Err(wasm_gen::Error)`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
