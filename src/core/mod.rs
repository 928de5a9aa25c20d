//! Core functionality for running checks
//!
//! Contains mode selection, the per-mode command plans and the sequential
//! dispatcher that executes them.

pub mod dispatcher;
pub mod mode;
pub mod plan;

pub use dispatcher::Dispatcher;
pub use mode::Mode;
pub use plan::{Invocation, Phase, Plan};
