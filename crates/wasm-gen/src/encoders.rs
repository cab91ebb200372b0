//! Low-level encoders.
//!
//! This module provides the primitive encoders that the construct encoders are
//! built from. They can also be used directly, for example to frame your own
//! section payloads.

use crate::constants::{self, MUTABILITIES, VALTYPES};
use crate::{Error, ErrorKind, Result, TagKind};

/// The module header, `\0asm`.
pub fn header() -> [u8; 4] {
    constants::MAGIC
}

/// A version field whose first byte is `v`.
///
/// The remaining bytes are those of [`constants::VERSION`]. Each call works on
/// its own copy of the canonical field.
pub fn version(v: u8) -> [u8; 4] {
    let mut bytes = constants::VERSION;
    bytes[0] = v;
    bytes
}

/// Encode a `u32` as a ULEB128.
pub fn u32(n: u32) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(5);
    write_u32(&mut bytes, n)?;
    Ok(bytes)
}

/// Encode `elements` as a vector: a ULEB128 element count followed by the
/// elements themselves.
pub fn vec(elements: &[u8]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(elements.len() + 5);
    write_vec(&mut bytes, elements)?;
    Ok(bytes)
}

/// Encode a length-prefixed UTF-8 name.
pub fn name(s: &str) -> Result<Vec<u8>> {
    vec(s.as_bytes())
}

/// The byte for the value type `name`, for example `i32`.
pub fn valtype(name: &str) -> Result<u8> {
    tag(VALTYPES, TagKind::Valtype, name)
}

/// The byte for the global mutability `name`, `const` or `var`.
pub fn mutability(name: &str) -> Result<u8> {
    tag(MUTABILITIES, TagKind::Mutability, name)
}

pub(crate) fn tag(table: &[(&str, u8)], kind: TagKind, name: &str) -> Result<u8> {
    match constants::lookup(table, name) {
        Some(byte) => Ok(byte),
        None => {
            log::debug!("no {kind} named `{name}`");
            Err(Error::unknown_tag(kind, name))
        }
    }
}

pub(crate) fn write_u32(sink: &mut Vec<u8>, n: u32) -> Result<()> {
    let (buf, len) = leb128fmt::encode_u32(n).ok_or(ErrorKind::Leb128(n))?;
    sink.extend_from_slice(&buf[..len]);
    Ok(())
}

pub(crate) fn write_vec(sink: &mut Vec<u8>, elements: &[u8]) -> Result<()> {
    let count =
        u32::try_from(elements.len()).map_err(|_| ErrorKind::VectorTooLong(elements.len()))?;
    write_u32(sink, count)?;
    sink.extend_from_slice(elements);
    Ok(())
}

pub(crate) fn write_name(sink: &mut Vec<u8>, s: &str) -> Result<()> {
    write_vec(sink, s.as_bytes())
}
