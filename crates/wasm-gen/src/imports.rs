use crate::encoders::{self, write_name, write_u32};
use crate::{Encode, Error, ImportDescriptor, Limits, ModuleImport, Result};

impl Encode for Limits {
    fn encode(&self, sink: &mut Vec<u8>) -> Result<()> {
        match self.max {
            Some(max) => {
                sink.push(0x01);
                write_u32(sink, self.min)?;
                write_u32(sink, max)?;
            }
            None => {
                sink.push(0x00);
                write_u32(sink, self.min)?;
            }
        }
        Ok(())
    }
}

impl Encode for ImportDescriptor {
    fn encode(&self, sink: &mut Vec<u8>) -> Result<()> {
        if let Some(id) = self.id() {
            id.num()?;
        }
        match self {
            ImportDescriptor::GlobalType {
                valtype,
                mutability,
            } => {
                sink.push(0x03);
                sink.push(encoders::valtype(valtype)?);
                sink.push(encoders::mutability(mutability)?);
            }
            ImportDescriptor::Memory { limits } => {
                sink.push(0x02);
                limits.encode(sink)?;
            }
            ImportDescriptor::Func { .. } | ImportDescriptor::Table { .. } => {
                log::debug!("no encoder for `{}` import descriptors", self.kind());
                return Err(Error::unsupported_descriptor(self.kind()));
            }
        }
        Ok(())
    }
}

impl Encode for ModuleImport {
    fn encode(&self, sink: &mut Vec<u8>) -> Result<()> {
        log::trace!(
            "encoding {} import `{}` `{}`",
            self.descr.kind(),
            self.module,
            self.name
        );
        let mut bytes = Vec::new();
        write_name(&mut bytes, &self.module)?;
        write_name(&mut bytes, &self.name)?;
        self.descr.encode(&mut bytes)?;
        sink.extend_from_slice(&bytes);
        Ok(())
    }
}
