//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: Config,
}

impl CommandDispatcher {
    /// Create a new dispatcher using the resolved configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration commands run with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Without a subcommand the template name from the top-level arguments
    /// is resolved and written.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(self.config.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Update(args)) => {
                let cmd = super::update::UpdateCommand::new(self.config.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Clean(args)) => {
                let cmd = super::clean::CleanCommand::new(self.config.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Path) => {
                let cmd = super::path::PathCommand::new(self.config.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::get::GetCommand::new(self.config.clone(), cli.get.clone());
                cmd.execute(ui)
            }
        }
    }
}
