//! Command implementations for the CLI

use crate::{
    config::Config,
    core::{Dispatcher, Mode, Plan},
    error::Result,
    utils::process::{DryRunRunner, ProcessRunner, Runner},
};
use std::process::ExitCode;
use tracing::{error, info, instrument};

/// Execute the checks selected by `mode` and return the process exit code
#[instrument(skip(config))]
pub fn execute_command(config: &Config, mode: &str) -> ExitCode {
    let mode = Mode::from_token(mode);
    let plan = Plan::for_mode(mode, config);

    let outcome = if config.dry_run {
        run_plan(DryRunRunner::new(std::io::stdout()), &plan)
    } else {
        run_plan(
            ProcessRunner::new(config.debug).with_work_dir(&config.work_dir),
            &plan,
        )
    };

    match outcome {
        Ok(count) if config.dry_run => {
            info!("Dry run: {} command(s) printed, none were executed", count);
            ExitCode::SUCCESS
        }
        Ok(count) => {
            info!("{} mode finished, {} command(s) succeeded", mode, count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run_plan<R: Runner>(runner: R, plan: &Plan) -> Result<usize> {
    let mut dispatcher = Dispatcher::new(runner, std::io::stdout());
    dispatcher.run(plan)
}
