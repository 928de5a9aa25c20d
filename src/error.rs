//! Error types for the check dispatcher
//!
//! Every failure is fatal. The variants only carry enough context to report
//! the failure and pick the process exit code.

use thiserror::Error;

/// Exit code used when a tool could not be started at all
pub const SPAWN_FAILURE_EXIT_CODE: u8 = 127;

/// Main error type for the check dispatcher
#[derive(Error, Debug)]
pub enum CheckError {
    /// An external tool ran and exited with a failure status
    #[error("Process error: {command} failed with exit code {}", display_code(.exit_code))]
    Process {
        command: String,
        exit_code: Option<i32>,
    },

    /// An external tool could not be started
    #[error("Process error: failed to execute {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing progress output failed
    #[error("Output error: failed to write progress banner")]
    Output {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

impl CheckError {
    /// Create a new process error
    pub fn process(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
        }
    }

    /// Create a new spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Process exit code to terminate with when this error aborts the run
    ///
    /// A failing tool's own code is passed through when it fits in `1..=255`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Process {
                exit_code: Some(code),
                ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            Self::Spawn { .. } => SPAWN_FAILURE_EXIT_CODE,
            Self::Process { exit_code: None, .. } | Self::Output { .. } | Self::Config { .. } => 1,
        }
    }
}

impl From<std::io::Error> for CheckError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CheckError>;
