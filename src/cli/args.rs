//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Default file written by `gitignore <NAME>`.
pub const DEFAULT_OUTPUT: &str = ".gitignore";

/// gitignore - Create .gitignore files from the github/gitignore templates.
#[derive(Debug, Parser)]
#[command(name = "gitignore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
#[command(arg_required_else_help = true)]
#[command(after_help = "The templates are stored in ~/.gitignore-cli unless --store is given.")]
pub struct Cli {
    #[command(flatten)]
    pub get: GetArgs,

    /// Path to config file (overrides the default config.yml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Template store directory (overrides config and GITIGNORE_CLI_STORE)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print nothing except errors and requested output
    #[arg(long, global = true, conflicts_with_all = ["verbose", "quiet"])]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for creating a .gitignore file (the default action).
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GetArgs {
    /// Template name, e.g. Go, Global/JetBrains or community/JavaScript/Vue
    pub name: Option<String>,

    /// File to write
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Overwrite an existing file without asking
    #[arg(short, long)]
    pub force: bool,

    /// Print the template instead of writing a file
    #[arg(long, conflicts_with = "force")]
    pub stdout: bool,

    /// Only use templates already in the store
    #[arg(long)]
    pub offline: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all available templates
    List(ListArgs),

    /// Replace the store with a fresh copy of every template
    Update(UpdateArgs),

    /// Remove all locally stored templates
    Clean(CleanArgs),

    /// Print the template store location
    Path,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `update` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UpdateArgs {
    /// Don't prompt for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `clean` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CleanArgs {
    /// Don't prompt for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
