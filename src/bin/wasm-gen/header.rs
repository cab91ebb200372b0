use anyhow::Result;
use wasm_gen::encoders;

/// Write the module preamble: the magic header and the version field.
#[derive(clap::Parser)]
pub struct Opts {
    /// The first byte of the version field.
    #[clap(long, value_name = "BYTE", default_value_t = 1)]
    version_byte: u8,

    #[clap(flatten)]
    output: crate::output::OutputArg,
}

impl Opts {
    pub fn run(&self) -> Result<()> {
        let mut bytes = encoders::header().to_vec();
        bytes.extend(encoders::version(self.version_byte));
        self.output.write(&bytes)
    }
}
