#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use devcheck::{cli, config::Config, setup_logging};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = cli::parse_args();

    setup_logging(args.debug)?;

    let config = Config::from_args(&args)?;

    // The exit code of the first failing tool becomes our own
    Ok(cli::execute_command(&config, &args.mode))
}
