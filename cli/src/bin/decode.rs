use std::process::ExitCode;

use clap::Parser;
use lz78_cli::{args::DecodeArgs, commands, logging};

fn main() -> ExitCode {
    logging::init_tracing();
    let args = DecodeArgs::parse();

    match commands::run_decode(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("decode: {e:#}");
            ExitCode::FAILURE
        }
    }
}
