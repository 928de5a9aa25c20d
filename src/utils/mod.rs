//! Utility modules for common functionality
//!
//! Provides process execution behind the [`Runner`] seam.

pub mod process;

pub use process::{DryRunRunner, ProcessRunner, Runner};
