use crate::constants::SECTIONS;
use crate::encoders::{tag, write_u32};
use crate::{Encode, Error, Result, SectionMetadata, TagKind};

impl Encode for SectionMetadata {
    /// Encodes `<section id><size><element count>`.
    ///
    /// The start section holds a single function index rather than a vector,
    /// so it is rejected here.
    fn encode(&self, sink: &mut Vec<u8>) -> Result<()> {
        let id = tag(SECTIONS, TagKind::Section, &self.section)?;
        if self.section == "start" {
            log::debug!("the start section has no vector to describe");
            return Err(Error::unsupported_section(self.section.as_str()));
        }
        log::trace!(
            "encoding {} section header ({} bytes, {} entries)",
            self.section,
            self.size,
            self.vector_of_size
        );

        let mut bytes = vec![id];
        write_u32(&mut bytes, self.size)?;
        write_u32(&mut bytes, self.vector_of_size)?;
        sink.extend_from_slice(&bytes);
        Ok(())
    }
}
