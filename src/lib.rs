//! # devcheck
//!
//! Runs the lint, format and test tools of the sekha Python SDK in a fixed
//! order, stopping at the first tool that fails.
//!
//! ## Modes
//!
//! - `lint`: static analysis, then a verify-only formatting check
//! - `unit`: the test suite in verbose mode
//! - `all` (also the default and the fallback for unknown modes): both lint
//!   tools, then the test suite with an HTML coverage report
//!
//! ## Example
//!
//! ```no_run
//! use devcheck::{config::Config, core::{Dispatcher, Mode, Plan}, utils::ProcessRunner};
//!
//! let config = Config::default();
//! let plan = Plan::for_mode("lint".parse::<Mode>()?, &config);
//! let mut dispatcher = Dispatcher::new(ProcessRunner::new(false), std::io::stdout());
//! dispatcher.run(&plan)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Log lines go to stderr so stdout carries only banners and tool output.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
