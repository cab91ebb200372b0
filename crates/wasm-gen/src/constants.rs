//! Constant tables of the WebAssembly binary format.
//!
//! Every table maps a symbolic name, as it appears in the AST, to the single
//! byte the binary format uses for it. The tables are plain `static` data so
//! they are initialized before any encoder runs and can never be written to.

/// The magic number every WebAssembly binary starts with (`\0asm`).
pub const MAGIC: [u8; 4] = *b"\0asm";

/// The canonical version field of a core module.
pub const VERSION: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

/// Value types.
pub static VALTYPES: &[(&str, u8)] = &[
    ("i32", 0x7f),
    ("i64", 0x7e),
    ("f32", 0x7d),
    ("f64", 0x7c),
    ("v128", 0x7b),
];

/// Global mutability.
pub static MUTABILITIES: &[(&str, u8)] = &[("const", 0x00), ("var", 0x01)];

/// Section identifiers of a core module.
pub static SECTIONS: &[(&str, u8)] = &[
    ("custom", 0),
    ("type", 1),
    ("import", 2),
    ("func", 3),
    ("table", 4),
    ("memory", 5),
    ("global", 6),
    ("export", 7),
    ("start", 8),
    ("element", 9),
    ("code", 10),
    ("data", 11),
];

/// Export descriptor kinds.
///
/// `Mem` is the short name used by AST producers; `Memory` is accepted as
/// well.
pub static EXPORT_KINDS: &[(&str, u8)] = &[
    ("Func", 0x00),
    ("Table", 0x01),
    ("Mem", 0x02),
    ("Memory", 0x02),
    ("Global", 0x03),
];

/// Look up `name` in one of the tables of this module.
pub fn lookup(table: &[(&str, u8)], name: &str) -> Option<u8> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, byte)| *byte)
}
