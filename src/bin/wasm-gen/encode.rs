use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use wasm_gen::{encoders, Encode, Node};

/// Encode a list of AST nodes into binary fragments.
///
/// The input is a JSON array of nodes. Each node is encoded on its own and the
/// resulting fragments are concatenated in input order. The first node that
/// fails to encode aborts the whole run and nothing is written.
#[derive(clap::Parser)]
#[clap(after_help = "
Examples:

   To encode a call instruction and print it as hex:

          echo '[{\"type\": \"CallInstruction\", \"index\": 5}]' | wasm-gen encode --hex
")]
pub struct Opts {
    /// Input JSON file; stdin if not given or `-`.
    input: Option<PathBuf>,

    /// Emit the magic header and version field before the fragments.
    #[clap(long)]
    module_header: bool,

    /// The first byte of the version field when `--module-header` is given.
    #[clap(long, value_name = "BYTE", default_value_t = 1)]
    version_byte: u8,

    #[clap(flatten)]
    output: crate::output::OutputArg,
}

impl Opts {
    pub fn run(&self) -> Result<()> {
        let nodes = self.read_nodes()?;
        log::debug!("encoding {} nodes", nodes.len());

        let mut bytes = Vec::new();
        if self.module_header {
            bytes.extend(encoders::header());
            bytes.extend(encoders::version(self.version_byte));
        }
        for (i, node) in nodes.iter().enumerate() {
            node.encode(&mut bytes)
                .with_context(|| format!("failed to encode node {i}"))?;
        }

        self.output.write(&bytes)
    }

    fn read_nodes(&self) -> Result<Vec<Node>> {
        let (name, json) = match &self.input {
            Some(path) if path.to_str() != Some("-") => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                (path.display().to_string(), json)
            }
            _ => {
                let mut json = String::new();
                std::io::stdin()
                    .read_to_string(&mut json)
                    .context("failed to read stdin")?;
                ("<stdin>".to_string(), json)
            }
        };
        serde_json::from_str(&json).with_context(|| format!("failed to parse nodes from {name}"))
    }
}
