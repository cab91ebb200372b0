use crate::constants::EXPORT_KINDS;
use crate::encoders::{tag, write_name, write_u32};
use crate::{Encode, ModuleExport, Result, TagKind};

impl Encode for ModuleExport {
    fn encode(&self, sink: &mut Vec<u8>) -> Result<()> {
        let index = self.descr.id.num()?;
        let kind = tag(EXPORT_KINDS, TagKind::ExportKind, &self.descr.kind)?;
        log::trace!(
            "encoding {} export `{}` of index {index}",
            self.descr.kind,
            self.name
        );

        let mut bytes = Vec::new();
        write_name(&mut bytes, &self.name)?;
        bytes.push(kind);
        write_u32(&mut bytes, index)?;
        sink.extend_from_slice(&bytes);
        Ok(())
    }
}
