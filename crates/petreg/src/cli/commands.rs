//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Admin command arguments: credentials plus the operation to run.
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin username (prompted when omitted)
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Admin password (prompted when omitted)
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// The admin operation to run
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin operations over the record set.
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List records, optionally filtered
    List(ListArgs),

    /// Show the full detail of one record
    Show {
        /// The full record id
        id: String,
    },

    /// Delete a record by id
    Delete(DeleteArgs),

    /// Export the filtered records as CSV
    Export(ExportArgs),

    /// Remove every record from the store
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by status (case-insensitive substring)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by species (case-insensitive substring)
    #[arg(long)]
    pub species: Option<String>,

    /// Filter by name (case-insensitive substring)
    #[arg(long)]
    pub name: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// The record id to delete
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Directory to write the CSV file into (defaults to configuration)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Filter by status before exporting
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by species before exporting
    #[arg(long)]
    pub species: Option<String>,

    /// Filter by name before exporting
    #[arg(long)]
    pub name: Option<String>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args_debug() {
        let args = ListArgs {
            status: Some("lost".to_string()),
            species: None,
            name: None,
            json: false,
        };
        let debug_str = format!("{args:?}");
        assert!(debug_str.contains("status"));
        assert!(debug_str.contains("lost"));
    }

    #[test]
    fn test_delete_args_debug() {
        let args = DeleteArgs {
            id: "1700000000000".to_string(),
            yes: true,
        };
        let debug_str = format!("{args:?}");
        assert!(debug_str.contains("1700000000000"));
    }

    #[test]
    fn test_export_args_debug() {
        let args = ExportArgs {
            output: Some(PathBuf::from("/tmp")),
            status: None,
            species: None,
            name: None,
        };
        let debug_str = format!("{args:?}");
        assert!(debug_str.contains("output"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
