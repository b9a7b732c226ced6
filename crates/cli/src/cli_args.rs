//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::{Parser, ValueEnum};

/// What the user is asked to select.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Select an authenticated account
    Account,
    /// Select a project visible to an account
    Project,
}

/// Command-line arguments for the cloud-picker CLI tool.
///
/// This structure defines all available command-line options and arguments
/// that can be passed to the `cpk` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cloud_picker_cli::cli_args::Args;
///
/// // Parse arguments from command line
/// let args = Args::parse();
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the account manifest YAML.
    ///
    /// If not provided, defaults to `~/.cloud-picker/accounts.yml`.
    #[arg(long, short = 'a')]
    pub accounts_path: Option<String>,

    /// Path to the project manifest YAML.
    ///
    /// If not provided, defaults to `~/.cloud-picker/projects.yml`.
    #[arg(long, short = 'p')]
    pub projects_path: Option<String>,

    /// Shell command that performs a browser-based login.
    ///
    /// Run when the user agrees to add a new account. The account manifest
    /// is re-read after the command completes. Without it, enrolling a new
    /// account fails.
    #[arg(long, short = 'L')]
    pub login_command: Option<String>,

    /// Offer a synthetic "all" entry ahead of the real accounts.
    ///
    /// Only meaningful when selecting an account.
    #[arg(long, action)]
    pub all: bool,

    /// Never offer to enroll a new account.
    ///
    /// Skips the "add another account?" questions for empty and
    /// single-entry account lists.
    #[arg(long, action)]
    pub no_add: bool,

    /// Select projects for this account (email or key) instead of the
    /// currently active one.
    #[arg(long)]
    pub account: Option<String>,

    /// What to select.
    #[arg(value_enum, default_value_t = Target::Account)]
    pub target: Target,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["cpk"]);

        assert!(args.accounts_path.is_none());
        assert!(args.projects_path.is_none());
        assert!(args.login_command.is_none());
        assert!(!args.all);
        assert!(!args.no_add);
        assert!(args.account.is_none());
        assert_eq!(args.target, Target::Account);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "cpk",
            "-a",
            "/custom/accounts.yml",
            "-p",
            "/custom/projects.yml",
            "-L",
            "console auth login",
        ]);

        assert_eq!(args.accounts_path, Some("/custom/accounts.yml".to_string()));
        assert_eq!(args.projects_path, Some("/custom/projects.yml".to_string()));
        assert_eq!(args.login_command, Some("console auth login".to_string()));
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "cpk",
            "--accounts-path",
            "/custom/accounts.yml",
            "--projects-path",
            "/custom/projects.yml",
            "--login-command",
            "console auth login",
            "--all",
            "--no-add",
        ]);

        assert_eq!(args.accounts_path, Some("/custom/accounts.yml".to_string()));
        assert_eq!(args.projects_path, Some("/custom/projects.yml".to_string()));
        assert_eq!(args.login_command, Some("console auth login".to_string()));
        assert!(args.all);
        assert!(args.no_add);
    }

    #[test]
    fn test_args_project_target() {
        let args = Args::parse_from(["cpk", "project"]);
        assert_eq!(args.target, Target::Project);
    }

    #[test]
    fn test_args_account_target_with_explicit_account() {
        let args = Args::parse_from(["cpk", "project", "--account", "work@example.com"]);

        assert_eq!(args.target, Target::Project);
        assert_eq!(args.account, Some("work@example.com".to_string()));
    }

    #[test]
    fn test_args_rejects_unknown_target() {
        let result = Args::try_parse_from(["cpk", "bucket"]);
        assert!(result.is_err());
    }
}
