use crate::{CallInstruction, Encode, Result};

impl Encode for CallInstruction {
    fn encode(&self, sink: &mut Vec<u8>) -> Result<()> {
        let index = self.index.num()?;
        log::trace!("encoding call {index}");
        sink.push(0x10);
        crate::encoders::write_u32(sink, index)
    }
}
