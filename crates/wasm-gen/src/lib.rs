//! Encoders for WebAssembly module constructs.
//!
//! This crate turns already-resolved AST nodes, such as import and export
//! entries, section headers and `call` instructions, into the exact bytes the
//! [WebAssembly binary format] prescribes for them. Assembling the fragments
//! into a whole module, in section order, is left to the caller.
//!
//! Every construct implements [`Encode`]. Encoding fails with an [`Error`]
//! when a node still contains an unresolved identifier, names a tag that has
//! no binary encoding, or uses a construct this crate has no encoder for.
//!
//! [WebAssembly binary format]: https://webassembly.github.io/spec/core/binary/index.html
//!
//! # Example
//!
//! ```
//! use wasm_gen::{Encode, ImportDescriptor, Limits, ModuleImport};
//!
//! let import = ModuleImport {
//!     module: "env".to_string(),
//!     name: "mem".to_string(),
//!     descr: ImportDescriptor::Memory {
//!         limits: Limits { min: 1, max: Some(2) },
//!     },
//! };
//!
//! assert_eq!(
//!     import.to_bytes().unwrap(),
//!     [3, b'e', b'n', b'v', 3, b'm', b'e', b'm', 0x02, 0x01, 0x01, 0x02],
//! );
//! ```

#![deny(missing_docs, missing_debug_implementations)]

mod ast;
mod error;
mod exports;
mod imports;
mod instructions;
mod sections;

pub mod constants;
pub mod encoders;

pub use ast::*;
pub use error::*;

/// Implemented by every node that can be encoded into the binary format.
pub trait Encode {
    /// Encode the type into the given sink.
    ///
    /// On failure the sink may hold a partial encoding, which must not be
    /// used.
    fn encode(&self, sink: &mut Vec<u8>) -> Result<()>;

    /// Encode the type into a fresh buffer.
    ///
    /// Nothing is returned unless the whole node encoded successfully.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes)?;
        Ok(bytes)
    }
}

impl<T: Encode + ?Sized> Encode for &'_ T {
    fn encode(&self, sink: &mut Vec<u8>) -> Result<()> {
        T::encode(self, sink)
    }
}

impl Encode for Index {
    fn encode(&self, sink: &mut Vec<u8>) -> Result<()> {
        encoders::write_u32(sink, self.num()?)
    }
}

impl Encode for Node {
    fn encode(&self, sink: &mut Vec<u8>) -> Result<()> {
        match self {
            Node::ModuleImport(n) => n.encode(sink),
            Node::SectionMetadata(n) => n.encode(sink),
            Node::CallInstruction(n) => n.encode(sink),
            Node::ModuleExport(n) => n.encode(sink),
        }
    }
}

/// Encode `node` with the encoder for its variant.
pub fn encode_node(node: &Node) -> Result<Vec<u8>> {
    node.to_bytes()
}
