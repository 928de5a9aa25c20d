//! Command-line argument parsing and validation

use clap::Parser;
use std::path::PathBuf;

/// Mode used when none is given on the command line
pub const DEFAULT_MODE: &str = "all";

/// devcheck - Run the SDK's lint, format and test tools in order
///
/// Help and version flags are disabled: every token that is not one of the
/// options below is taken as the mode, so `-h` runs all checks like any
/// other unknown mode.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "devcheck")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Which checks to run: lint, unit or all (any other value runs all)
    #[arg(
        value_name = "MODE",
        default_value = DEFAULT_MODE,
        allow_hyphen_values = true
    )]
    pub mode: String,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print the commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Directory the tools are run in
    #[arg(short = 'C', long = "work-dir")]
    pub work_dir: Option<PathBuf>,

    /// Test directory passed to the test runner
    #[arg(long = "test-dir")]
    pub test_dir: Option<String>,

    /// Package measured for coverage
    #[arg(long = "cov-package")]
    pub cov_package: Option<String>,

    /// Coverage report format
    #[arg(long = "cov-report")]
    pub cov_report: Option<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_mode() {
        let args = Args::try_parse_from(["devcheck"]).unwrap();
        assert_eq!(args.mode, "all");
        assert!(!args.debug);
        assert!(!args.dry_run);
        assert!(args.work_dir.is_none());
    }

    #[test]
    fn test_parse_explicit_mode() {
        let args = Args::try_parse_from(["devcheck", "lint"]).unwrap();
        assert_eq!(args.mode, "lint");

        let args = Args::try_parse_from(["devcheck", "bogus"]).unwrap();
        assert_eq!(args.mode, "bogus");
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = Args::try_parse_from(["devcheck", "--debug", "unit"]).unwrap();
        assert!(args.debug);
        assert_eq!(args.mode, "unit");
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from([
            "devcheck",
            "-C",
            "sdk",
            "--test-dir",
            "it/",
            "--cov-package",
            "other",
            "--cov-report",
            "xml",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(args.mode, "all");
        assert_eq!(args.work_dir, Some(PathBuf::from("sdk")));
        assert_eq!(args.test_dir.as_deref(), Some("it/"));
        assert_eq!(args.cov_package.as_deref(), Some("other"));
        assert_eq!(args.cov_report.as_deref(), Some("xml"));
        assert!(args.dry_run);
    }

    #[test]
    fn test_dash_tokens_become_the_mode() {
        for token in ["-x", "--bogus", "-h", "--help", "--version", "-V"] {
            let args = Args::try_parse_from(["devcheck", token]).unwrap();
            assert_eq!(args.mode, token);
        }
    }

    #[test]
    fn test_known_options_still_parse_around_dash_mode() {
        let args =
            Args::try_parse_from(["devcheck", "--debug", "--bogus", "--dry-run"]).unwrap();
        assert_eq!(args.mode, "--bogus");
        assert!(args.debug);
        assert!(args.dry_run);
    }

    #[test]
    fn test_reject_extra_tokens() {
        assert!(Args::try_parse_from(["devcheck", "lint", "unit"]).is_err());
    }
}
