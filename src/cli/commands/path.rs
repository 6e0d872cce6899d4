//! Path command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the store root.
pub struct PathCommand {
    config: Config,
}

impl PathCommand {
    /// Create a new path command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Command for PathCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.config.store_root()?;
        ui.raw(&format!("{}\n", root.display()));
        Ok(CommandResult::success())
    }
}
