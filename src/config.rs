//! Configuration management for the check dispatcher
//!
//! Holds the fixed tool commands and lets the command line override the
//! directories and coverage settings they are given.

use crate::{cli::Args, error::CheckError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Print commands instead of running them
    pub dry_run: bool,
    /// Working directory the tools run in
    pub work_dir: PathBuf,
    /// External tool configuration
    pub tools: ToolsConfig,
    /// Test run configuration
    pub tests: TestConfig,
}

/// External tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Static analysis program
    pub linter: String,
    /// Arguments for the static analysis run
    pub linter_args: Vec<String>,
    /// Formatting checker program
    pub formatter: String,
    /// Arguments for a verify-only formatting run
    pub formatter_args: Vec<String>,
    /// Test runner program
    pub test_runner: String,
}

/// Test run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    /// Directory holding the test suite
    pub dir: String,
    /// Flag putting the test runner in verbose mode
    pub verbose_flag: String,
    /// Package measured for coverage
    pub coverage_package: String,
    /// Coverage report format
    pub coverage_report: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            dry_run: false,
            work_dir: PathBuf::from("."),
            tools: ToolsConfig::default(),
            tests: TestConfig::default(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            linter: "ruff".to_string(),
            linter_args: vec!["check".to_string(), ".".to_string()],
            formatter: "black".to_string(),
            formatter_args: vec!["--check".to_string(), ".".to_string()],
            test_runner: "pytest".to_string(),
        }
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            dir: "tests/".to_string(),
            verbose_flag: "-v".to_string(),
            coverage_package: "sekha".to_string(),
            coverage_report: "html".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, CheckError> {
        let mut config = Self {
            debug: args.debug,
            dry_run: args.dry_run,
            ..Self::default()
        };

        if let Some(work_dir) = &args.work_dir {
            config.work_dir = work_dir.clone();
        }
        if let Some(dir) = &args.test_dir {
            config.tests.dir = dir.clone();
        }
        if let Some(package) = &args.cov_package {
            config.tests.coverage_package = package.clone();
        }
        if let Some(report) = &args.cov_report {
            config.tests.coverage_report = report.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CheckError> {
        if !self.work_dir.is_dir() {
            return Err(CheckError::config(format!(
                "Working directory not found: {}",
                self.work_dir.display()
            )));
        }

        if self.tests.dir.trim().is_empty() {
            return Err(CheckError::config("Test directory must not be empty"));
        }

        if self.tests.coverage_package.trim().is_empty() {
            return Err(CheckError::config("Coverage package must not be empty"));
        }

        if self.tests.coverage_report.trim().is_empty() {
            return Err(CheckError::config("Coverage report format must not be empty"));
        }

        Ok(())
    }

    /// Get static analysis command with arguments
    pub fn lint_cmd(&self) -> (String, Vec<String>) {
        (self.tools.linter.clone(), self.tools.linter_args.clone())
    }

    /// Get formatting check command with arguments
    pub fn format_cmd(&self) -> (String, Vec<String>) {
        (self.tools.formatter.clone(), self.tools.formatter_args.clone())
    }

    /// Get test runner command with arguments
    pub fn test_cmd(&self, coverage: bool) -> (String, Vec<String>) {
        let mut args = vec![self.tests.dir.clone(), self.tests.verbose_flag.clone()];

        if coverage {
            args.push(format!("--cov={}", self.tests.coverage_package));
            args.push(format!("--cov-report={}", self.tests.coverage_report));
        }

        (self.tools.test_runner.clone(), args)
    }
}
