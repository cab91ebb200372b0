use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

mod encode;
mod header;
mod output;

/// Encode resolved WebAssembly AST nodes into the binary format.
#[derive(Parser)]
#[clap(version)]
#[allow(non_camel_case_types)]
enum WasmGen {
    encode(encode::Opts),
    header(header::Opts),
}

impl WasmGen {
    fn run(self) -> Result<()> {
        match self {
            Self::encode(opts) => opts.run(),
            Self::header(opts) => opts.run(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let err = match <WasmGen as Parser>::parse().run() {
        Ok(()) => return ExitCode::SUCCESS,
        Err(e) => e,
    };
    // A closed stdout pipe is not worth reporting.
    if let Some(io) = err.downcast_ref::<io::Error>() {
        if io.kind() == io::ErrorKind::BrokenPipe {
            return ExitCode::FAILURE;
        }
    }
    eprintln!("Error: {err:?}");
    ExitCode::FAILURE
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    WasmGen::command().debug_assert()
}
