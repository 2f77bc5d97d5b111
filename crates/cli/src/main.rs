use std::process::ExitCode;

use clap::Parser;
use log::debug;

use aqi_cli::cli_args::Args;
use aqi_cli::{commands, output};

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    debug!("Arguments: {args:?}");

    match commands::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_non_fatal() => {
            output::warn(&e.to_string());
            ExitCode::SUCCESS
        }
        Err(e) => {
            output::danger(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
