//! Command-line interface for petreg.
//!
//! This module provides the CLI structure and command handlers for the
//! `petreg` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AdminArgs, AdminCommand, ConfigCommand, DeleteArgs, ExportArgs, ListArgs};

/// petreg - Lost-and-found pet registry
///
/// Registers lost and found pets through a guided intake form and manages
/// the resulting records: listing, filtering, CSV export, and deletion.
#[derive(Debug, Parser)]
#[command(name = "petreg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a pet through the guided intake form
    Add,

    /// Administer the record set (requires credentials)
    Admin(AdminArgs),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "petreg");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli::try_parse_from(["petreg", "-q", "add"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["petreg", "add"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        let cli = Cli::try_parse_from(["petreg", "-v", "add"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli::try_parse_from(["petreg", "-vv", "add"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["petreg", "add"]).unwrap();
        assert!(matches!(cli.command, Command::Add));
    }

    #[test]
    fn test_parse_admin_list_with_filters() {
        let cli = Cli::try_parse_from([
            "petreg", "admin", "-u", "login", "-p", "login", "list", "--status", "lost",
            "--species", "dog",
        ])
        .unwrap();

        let Command::Admin(admin) = cli.command else {
            panic!("expected admin command");
        };
        assert_eq!(admin.username.as_deref(), Some("login"));
        let AdminCommand::List(list) = admin.command else {
            panic!("expected list command");
        };
        assert_eq!(list.status.as_deref(), Some("lost"));
        assert_eq!(list.species.as_deref(), Some("dog"));
        assert!(list.name.is_none());
    }

    #[test]
    fn test_parse_admin_delete_with_yes() {
        let cli = Cli::try_parse_from([
            "petreg", "admin", "-u", "login", "-p", "login", "delete", "1700000000000", "--yes",
        ])
        .unwrap();

        let Command::Admin(admin) = cli.command else {
            panic!("expected admin command");
        };
        let AdminCommand::Delete(delete) = admin.command else {
            panic!("expected delete command");
        };
        assert_eq!(delete.id, "1700000000000");
        assert!(delete.yes);
    }

    #[test]
    fn test_parse_admin_export_with_output() {
        let cli = Cli::try_parse_from([
            "petreg", "admin", "-u", "login", "-p", "login", "export", "--output", "/tmp/exports",
        ])
        .unwrap();

        let Command::Admin(admin) = cli.command else {
            panic!("expected admin command");
        };
        let AdminCommand::Export(export) = admin.command else {
            panic!("expected export command");
        };
        assert_eq!(export.output, Some(PathBuf::from("/tmp/exports")));
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["petreg", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["petreg", "-c", "/custom/config.toml", "add"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
