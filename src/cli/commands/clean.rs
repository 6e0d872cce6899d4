//! Clean command implementation.
//!
//! `gitignore clean` removes the whole template store.

use crate::cli::args::CleanArgs;
use crate::config::Config;
use crate::error::Result;
use crate::store::{Confirmation, Store};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    config: Config,
    args: CleanArgs,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(config: Config, args: CleanArgs) -> Self {
        Self { config, args }
    }
}

impl Command for CleanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.config.store()?;
        clean_store(&store, self.args.yes, ui)
    }
}

/// Confirm and remove `store`.
pub fn clean_store(store: &Store, yes: bool, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    if !store.root().exists() {
        ui.message("No templates stored");
        return Ok(CommandResult::success());
    }

    let confirmation = if yes {
        Confirmation::Granted
    } else {
        let prompt = Prompt::new("clean", "Are you sure you want to remove all templates?");
        Confirmation::from(ui.confirm(&prompt)?)
    };

    if store.purge(confirmation)? {
        ui.success("Templates successfully removed");
    } else {
        ui.message("Operation cancelled");
    }
    Ok(CommandResult::success())
}
