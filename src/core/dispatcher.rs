//! Plan execution
//!
//! Runs a [`Plan`] one command at a time, announcing each phase, and stops at
//! the first command that fails.

use crate::{
    core::plan::{COMPLETE_BANNER, Plan},
    error::Result,
    utils::process::Runner,
};
use std::io::Write;
use tracing::{debug, instrument, warn};

/// Sequential executor for check plans
pub struct Dispatcher<R, W> {
    runner: R,
    out: W,
}

impl<R: Runner, W: Write> Dispatcher<R, W> {
    /// Create a dispatcher running commands through `runner` and writing
    /// banners to `out`
    pub const fn new(runner: R, out: W) -> Self {
        Self { runner, out }
    }

    /// Run every command of `plan` in order
    ///
    /// Returns the number of commands run. The first failure is returned
    /// unchanged and nothing after it runs, including the completion banner.
    #[instrument(skip(self, plan), fields(mode = %plan.mode))]
    pub fn run(&mut self, plan: &Plan) -> Result<usize> {
        let mut completed = 0;

        for phase in &plan.phases {
            self.banner(phase.banner)?;

            for invocation in &phase.invocations {
                debug!(
                    "Running command {} of {}: {}",
                    completed + 1,
                    plan.len(),
                    invocation
                );

                if let Err(e) = self.runner.run(invocation) {
                    warn!("Command {} failed: {}", completed + 1, e);
                    return Err(e);
                }
                completed += 1;
            }
        }

        self.banner(COMPLETE_BANNER)?;
        Ok(completed)
    }

    #[cfg(test)]
    fn into_parts(self) -> (R, W) {
        (self.runner, self.out)
    }

    fn banner(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        // Child processes share the terminal, so the banner must land first
        self.out.flush()?;
        Ok(())
    }
}
