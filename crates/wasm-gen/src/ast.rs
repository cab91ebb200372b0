//! The already-resolved AST nodes consumed by the encoders.
//!
//! Nodes are produced by a text parser and a name resolution pass, neither of
//! which live in this crate. By the time a node reaches an encoder every
//! [`Index`] in it is expected to be [`Index::Num`].

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde_derive::Deserialize;

/// A reference to another item in a wasm module.
///
/// References can be either a numeric index or a symbolic identifier such as
/// `$main`. Only numeric indices can be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(untagged))]
pub enum Index {
    /// A numerical index, in whatever index space the reference lives in.
    Num(u32),
    /// A human-readable identifier that was never resolved to a number.
    Id(String),
}

impl Index {
    /// Whether this index has been resolved to a number.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Index::Num(_))
    }

    /// The numeric value of this index, or an error naming the identifier if
    /// it was never resolved.
    pub fn num(&self) -> Result<u32> {
        match self {
            Index::Num(n) => Ok(*n),
            Index::Id(id) => {
                log::debug!("refusing to emit unresolved identifier `{id}`");
                Err(Error::unresolved_index(id.as_str()))
            }
        }
    }
}

impl From<u32> for Index {
    fn from(n: u32) -> Self {
        Index::Num(n)
    }
}

/// Size limits of a memory or table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Limits {
    /// The minimum size.
    pub min: u32,
    /// The optional maximum size.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max: Option<u32>,
}

/// What a module import brings in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(tag = "type"))]
pub enum ImportDescriptor {
    /// A function with the given type index.
    Func {
        /// Index into the type section.
        id: Index,
    },
    /// A table.
    Table {
        /// The element type, for example `funcref`.
        #[cfg_attr(feature = "serde", serde(rename = "elementType"))]
        element_type: String,
        /// The table's limits.
        limits: Limits,
    },
    /// A linear memory.
    Memory {
        /// The memory's limits, in pages.
        limits: Limits,
    },
    /// A global.
    GlobalType {
        /// The global's value type, for example `i32`.
        valtype: String,
        /// `const` or `var`.
        mutability: String,
    },
}

impl ImportDescriptor {
    /// The name of this descriptor's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ImportDescriptor::Func { .. } => "Func",
            ImportDescriptor::Table { .. } => "Table",
            ImportDescriptor::Memory { .. } => "Memory",
            ImportDescriptor::GlobalType { .. } => "GlobalType",
        }
    }

    /// The index this descriptor refers to, if any.
    pub fn id(&self) -> Option<&Index> {
        match self {
            ImportDescriptor::Func { id } => Some(id),
            _ => None,
        }
    }
}

/// An entry of the import section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct ModuleImport {
    /// The module being imported from.
    pub module: String,
    /// The name of the imported item.
    pub name: String,
    /// What is being imported.
    pub descr: ImportDescriptor,
}

/// The header of a vector-shaped section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SectionMetadata {
    /// The symbolic section name, for example `import`.
    pub section: String,
    /// The byte size of the section's contents.
    pub size: u32,
    /// The number of entries in the section's vector.
    pub vector_of_size: u32,
}

/// A `call` instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct CallInstruction {
    /// The index of the function being called.
    pub index: Index,
}

/// What a module export refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct ModuleExportDescr {
    /// The symbolic export kind, for example `Func`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// The index of the exported item.
    pub id: Index,
}

/// An entry of the export section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct ModuleExport {
    /// The name the item is exported under.
    pub name: String,
    /// The exported item.
    pub descr: ModuleExportDescr,
}

/// Any node this crate knows how to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(tag = "type"))]
pub enum Node {
    /// See [`ModuleImport`].
    ModuleImport(ModuleImport),
    /// See [`SectionMetadata`].
    SectionMetadata(SectionMetadata),
    /// See [`CallInstruction`].
    CallInstruction(CallInstruction),
    /// See [`ModuleExport`].
    ModuleExport(ModuleExport),
}
