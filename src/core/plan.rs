//! Execution plans
//!
//! Maps each [`Mode`] to its fixed, ordered list of external commands.

use crate::{config::Config, core::mode::Mode};
use std::fmt;

/// Banner printed when the lint phase starts
pub const LINT_BANNER: &str = "🔍 Running linters...";
/// Banner printed when the plain test phase starts
pub const UNIT_BANNER: &str = "🧪 Running unit tests...";
/// Banner printed when the coverage test phase starts
pub const COVERAGE_BANNER: &str = "🧪 Running tests with coverage...";
/// Banner printed once every command has succeeded
pub const COMPLETE_BANNER: &str = "✅ All checks passed!";

/// A single external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run, resolved through `PATH`
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation of `program` with `args`
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The command as it would be typed in a shell
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl From<(String, Vec<String>)> for Invocation {
    fn from((program, args): (String, Vec<String>)) -> Self {
        Self { program, args }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// A group of commands announced by one banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub banner: &'static str,
    pub invocations: Vec<Invocation>,
}

/// The ordered phases run for a mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub mode: Mode,
    pub phases: Vec<Phase>,
}

impl Plan {
    /// Build the plan for `mode` from the configured tool commands
    pub fn for_mode(mode: Mode, config: &Config) -> Self {
        let lint = || Phase {
            banner: LINT_BANNER,
            invocations: vec![
                Invocation::from(config.lint_cmd()),
                Invocation::from(config.format_cmd()),
            ],
        };

        let phases = match mode {
            Mode::Lint => vec![lint()],
            Mode::Unit => vec![Phase {
                banner: UNIT_BANNER,
                invocations: vec![Invocation::from(config.test_cmd(false))],
            }],
            Mode::All => vec![
                lint(),
                Phase {
                    banner: COVERAGE_BANNER,
                    invocations: vec![Invocation::from(config.test_cmd(true))],
                },
            ],
        };

        Self { mode, phases }
    }

    /// All commands in execution order
    pub fn invocations(&self) -> impl Iterator<Item = &Invocation> {
        self.phases.iter().flat_map(|phase| phase.invocations.iter())
    }

    /// Number of commands in the plan
    pub(crate) fn len(&self) -> usize {
        self.phases.iter().map(|phase| phase.invocations.len()).sum()
    }
}
