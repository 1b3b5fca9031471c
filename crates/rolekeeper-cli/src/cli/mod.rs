//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "rolekeeper",
    bin_name = "rolekeeper",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Manage roles: unique names, protected system roles",
    long_about = "Rolekeeper creates, renames, deletes and queries roles. Names are \
                  normalized (trimmed, whitespace collapsed, upper-cased) and must be \
                  unique; system roles can be read but never changed.",
    after_help = "EXAMPLES:\n\
        \x20 rolekeeper create \"ops team\"\n\
        \x20 rolekeeper update 3 analysts\n\
        \x20 rolekeeper list --search ops --format json\n\
        \x20 rolekeeper completions bash > /usr/share/bash-completion/completions/rolekeeper",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a role.
    #[command(
        visible_alias = "add",
        about = "Create a role",
        after_help = "EXAMPLES:\n\
            \x20 rolekeeper create analyst\n\
            \x20 rolekeeper create \"  billing   admins \"   # stored as BILLING ADMINS"
    )]
    Create(CreateArgs),

    /// Rename a role.
    #[command(
        visible_alias = "rename",
        about = "Rename a role",
        after_help = "EXAMPLES:\n\
            \x20 rolekeeper update 3 \"analyst team\""
    )]
    Update(UpdateArgs),

    /// Delete a role.
    #[command(
        visible_alias = "rm",
        about = "Delete a role",
        after_help = "EXAMPLES:\n\
            \x20 rolekeeper delete 3\n\
            \x20 rolekeeper delete 3 --yes"
    )]
    Delete(DeleteArgs),

    /// Show a role by id.
    #[command(about = "Show a role by id")]
    Get(GetArgs),

    /// Show a role by name.
    #[command(
        about = "Show a role by name",
        after_help = "EXAMPLES:\n\
            \x20 rolekeeper find admin"
    )]
    Find(NameArgs),

    /// Check whether a role name is taken.
    #[command(about = "Check whether a role exists")]
    Exists(NameArgs),

    /// List roles.
    #[command(
        visible_alias = "ls",
        about = "List roles",
        after_help = "EXAMPLES:\n\
            \x20 rolekeeper list\n\
            \x20 rolekeeper list --search ops\n\
            \x20 rolekeeper list --format csv > roles.csv"
    )]
    List(ListArgs),

    /// Count roles.
    #[command(about = "Count roles")]
    Count,

    /// Initialise a Rolekeeper configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 rolekeeper init\n\
            \x20 rolekeeper --config ./rolekeeper.toml init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 rolekeeper completions bash > ~/.local/share/bash-completion/completions/rolekeeper\n\
            \x20 rolekeeper completions zsh  > ~/.zfunc/_rolekeeper\n\
            \x20 rolekeeper completions fish > ~/.config/fish/completions/rolekeeper.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Rolekeeper configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 rolekeeper config get storage.path\n\
            \x20 rolekeeper config list"
    )]
    Config(ConfigCommands),
}

// ── role commands ─────────────────────────────────────────────────────────────

/// Arguments for `rolekeeper create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Raw role name; normalized before storage.
    #[arg(value_name = "NAME", help = "Role name")]
    pub name: String,
}

/// Arguments for `rolekeeper update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(value_name = "ID", allow_negative_numbers = true, help = "Role id")]
    pub id: i64,

    #[arg(value_name = "NAME", help = "New role name")]
    pub name: String,
}

/// Arguments for `rolekeeper delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(value_name = "ID", allow_negative_numbers = true, help = "Role id")]
    pub id: i64,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Delete without asking")]
    pub yes: bool,
}

/// Arguments for `rolekeeper get`.
#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(value_name = "ID", allow_negative_numbers = true, help = "Role id")]
    pub id: i64,
}

/// A role name argument (`find`, `exists`).
#[derive(Debug, Args)]
pub struct NameArgs {
    /// Any spelling that normalizes to the stored name.
    #[arg(value_name = "NAME", help = "Role name")]
    pub name: String,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `rolekeeper list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only roles whose name contains PATTERN (case-insensitive).
    #[arg(
        short = 's',
        long = "search",
        value_name = "PATTERN",
        help = "Filter by name substring"
    )]
    pub search: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `rolekeeper init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `rolekeeper completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `rolekeeper config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from(["rolekeeper", "create", "ops team"]);
        match cli.command {
            Commands::Create(args) => assert_eq!(args.name, "ops team"),
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn parse_update_keeps_raw_name() {
        let cli = Cli::parse_from(["rolekeeper", "update", "3", "  analyst team "]);
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.id, 3);
                assert_eq!(args.name, "  analyst team ");
            }
            other => panic!("expected Update, got {other:?}"),
        }
    }

    #[test]
    fn negative_ids_reach_the_service() {
        // Rejected by the id rules, not by the parser.
        let cli = Cli::parse_from(["rolekeeper", "get", "-4"]);
        assert!(matches!(cli.command, Commands::Get(GetArgs { id: -4 })));
    }

    #[test]
    fn delete_yes_flag() {
        let cli = Cli::parse_from(["rolekeeper", "rm", "5", "-y"]);
        assert!(matches!(
            cli.command,
            Commands::Delete(DeleteArgs { id: 5, yes: true })
        ));
    }

    #[test]
    fn list_defaults_to_table() {
        let cli = Cli::parse_from(["rolekeeper", "ls"]);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.format, ListFormat::Table);
                assert!(args.search.is_none());
            }
            other => panic!("expected List, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_id_is_a_parse_error() {
        assert!(Cli::try_parse_from(["rolekeeper", "get", "abc"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["rolekeeper", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
