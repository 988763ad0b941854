//! Usage:
//!   simplelog [--config PATH] [--level LEVEL] [--out SINK] [--err SINK] <level> <message> [args]...

use clap::Parser;
use simplelog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("simplelog: {e}");
            ExitCode::FAILURE
        }
    }
}
