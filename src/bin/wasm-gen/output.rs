use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Where encoded bytes end up.
#[derive(clap::Parser)]
pub struct OutputArg {
    /// Where to write the output bytes; stdout if not given.
    #[clap(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Write the bytes as lowercase hex followed by a newline.
    #[clap(long)]
    hex: bool,
}

impl OutputArg {
    pub fn write(&self, bytes: &[u8]) -> Result<()> {
        let hex;
        let data = if self.hex {
            hex = to_hex(bytes);
            hex.as_bytes()
        } else {
            bytes
        };
        match &self.output {
            Some(path) => {
                std::fs::write(path, data)
                    .with_context(|| format!("failed to write `{}`", path.display()))?;
                log::debug!("wrote {} bytes to `{}`", data.len(), path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(data)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

fn to_hex(bytes: &[u8]) -> String {
    let mut s = bytes.iter().map(|b| format!("{b:02x}")).collect::<String>();
    s.push('\n');
    s
}
