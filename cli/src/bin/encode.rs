use std::process::ExitCode;

use clap::Parser;
use lz78_cli::{args::EncodeArgs, commands, logging};

fn main() -> ExitCode {
    logging::init_tracing();
    let args = EncodeArgs::parse();

    match commands::run_encode(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("encode: {e:#}");
            ExitCode::FAILURE
        }
    }
}
