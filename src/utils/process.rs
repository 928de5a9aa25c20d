//! Process execution utilities
//!
//! Provides the [`Runner`] seam the dispatcher executes commands through,
//! with a real subprocess implementation and a print-only one.

use crate::{
    core::plan::Invocation,
    error::{CheckError, Result},
};
use std::{
    cell::RefCell,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};
use tracing::{debug, info, instrument};

/// Something that can execute an [`Invocation`]
pub trait Runner {
    /// Run the command to completion, failing unless it exits successfully
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
    work_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self {
            debug,
            work_dir: None,
        }
    }

    /// Run commands inside `dir` instead of the current directory
    #[must_use]
    pub fn with_work_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.work_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Run a command with arguments, inheriting stdout/stderr
    #[instrument(skip(self))]
    pub fn run_command(&self, command: &str, args: &[&str]) -> Result<()> {
        let cmd_str = if args.is_empty() {
            command.to_string()
        } else {
            format!("{} {}", command, args.join(" "))
        };

        if self.debug {
            debug!("Running command: {}", cmd_str);
            if let Some(dir) = &self.work_dir {
                debug!("Working directory: {}", dir.display());
            }
        } else {
            info!("+ {}", cmd_str);
        }

        let mut cmd = Command::new(command);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }

        let status = cmd
            .status()
            .map_err(|e| CheckError::spawn(cmd_str.clone(), e))?;

        if !status.success() {
            return Err(CheckError::process(cmd_str, status.code()));
        }

        debug!("Command completed successfully");
        Ok(())
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Runner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
        self.run_command(&invocation.program, &args)
    }
}

/// Runner that only prints each command line, prefixed with `+ `
#[derive(Debug)]
pub struct DryRunRunner<W> {
    out: RefCell<W>,
}

impl<W: Write> DryRunRunner<W> {
    /// Create a dry-run runner printing command lines to `out`
    pub const fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Runner for DryRunRunner<W> {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "+ {invocation}")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true);
        assert!(runner.debug);
        assert!(runner.work_dir.is_none());

        let runner = ProcessRunner::default();
        assert!(!runner.debug);
    }

    #[test]
    fn test_run_simple_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_command("echo", &["hello"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_failing_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_command("false", &[]);

        if let Err(CheckError::Process { command, exit_code }) = result {
            assert_eq!(command, "false");
            assert_eq!(exit_code, Some(1));
        } else {
            panic!("Expected Process error");
        }
    }

    #[test]
    fn test_exit_code_is_preserved() {
        let runner = ProcessRunner::new(false);
        let err = runner.run_command("sh", &["-c", "exit 7"]).unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_missing_program() {
        let runner = ProcessRunner::new(false);
        let err = runner
            .run_command("nonexistent_command_12345", &["--check"])
            .unwrap_err();

        assert!(matches!(err, CheckError::Spawn { .. }));
        assert_eq!(err.exit_code(), 127);
    }

    #[test]
    fn test_runs_in_work_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("marker"), "").unwrap();

        let runner = ProcessRunner::new(false).with_work_dir(temp_dir.path());
        assert!(runner.run_command("test", &["-f", "marker"]).is_ok());

        let runner = ProcessRunner::new(false);
        assert!(runner.run_command("test", &["-f", "marker"]).is_err());
    }

    #[test]
    fn test_runner_trait_uses_invocation() {
        let runner = ProcessRunner::new(true);
        let ok = Invocation::new("sh", vec!["-c".into(), "exit 0".into()]);
        let fail = Invocation::new("sh", vec!["-c".into(), "exit 5".into()]);

        assert!(runner.run(&ok).is_ok());
        assert_eq!(runner.run(&fail).unwrap_err().exit_code(), 5);
    }

    #[test]
    fn test_dry_run_prints_commands() {
        let runner = DryRunRunner::new(Vec::new());
        runner
            .run(&Invocation::new("ruff", vec!["check".into(), ".".into()]))
            .unwrap();
        runner
            .run(&Invocation::new("nonexistent_command_12345", vec![]))
            .unwrap();

        let out = String::from_utf8(runner.into_inner()).unwrap();
        assert_eq!(out, "+ ruff check .\n+ nonexistent_command_12345\n");
    }
}
