//! List command implementation.
//!
//! The `gitignore list` command prints every template in the store, grouped
//! by category.

use crate::cli::args::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::remote::ContentSource;
use crate::session::Session;
use crate::ui::UserInterface;

use super::display::{render_listing, show_load_report, ListingJson};
use super::dispatcher::{Command, CommandResult};
use super::get::open_session;

/// The list command implementation.
pub struct ListCommand {
    config: Config,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: Config, args: ListArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.config.store()?;
        let remote = if self.config.mirror_when_empty {
            Some(self.config.remote()?)
        } else {
            None
        };
        let source = remote.as_ref().map(|r| r as &dyn ContentSource);

        let session = open_session(store, source, &self.config)?;
        list_templates(&session, &self.args, ui)
    }
}

/// Print the session's templates.
pub fn list_templates(
    session: &Session,
    args: &ListArgs,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let registry = session.registry();

    if args.json {
        let output = serde_json::to_string_pretty(&ListingJson::new(registry))
            .map_err(anyhow::Error::from)?;
        ui.raw(&output);
        ui.raw("\n");
        return Ok(CommandResult::success());
    }

    show_load_report(session.report(), ui);
    ui.raw(&render_listing(registry));

    if registry.is_empty() {
        ui.show_hint("Run 'gitignore update' to download the templates");
    }

    Ok(CommandResult::success())
}
