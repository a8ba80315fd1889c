use std::io;
use std::process::ExitCode;

use clap::Parser;
use farmtech::cli::{Args, init_logging, run};

/// Downstream closed stdout (e.g. piping to `head`); not a failure.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[farmtech] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
