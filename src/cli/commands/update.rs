//! Update command implementation.
//!
//! `gitignore update` empties the store and mirrors the root, `Global` and
//! `community` tiers into it.

use std::time::Duration;

use anyhow::Result;

use crate::cli::args::UpdateArgs;
use crate::config::Config;
use crate::remote::{ContentSource, Mirror, MirrorEvent};
use crate::store::{Confirmation, Store};
use crate::ui::{Prompt, UserInterface};

use super::display::show_mirror_report;
use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand {
    config: Config,
    args: UpdateArgs,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(config: Config, args: UpdateArgs) -> Self {
        Self { config, args }
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let store = self.config.store()?;
        let source = self.config.remote()?;
        let code = update_templates(
            &store,
            &source,
            self.config.download_delay(),
            self.args.yes,
            ui,
        )?;

        Ok(if code == 0 {
            CommandResult::success()
        } else {
            CommandResult::failure(code)
        })
    }
}

/// Confirm, reset the store and mirror every tier. Returns the exit code.
pub fn update_templates(
    store: &Store,
    source: &dyn ContentSource,
    delay: Duration,
    yes: bool,
    ui: &mut dyn UserInterface,
) -> Result<i32> {
    let confirmation = if yes {
        Confirmation::Granted
    } else {
        let prompt = Prompt::new(
            "update",
            format!(
                "Replace all templates in {} with a fresh download?",
                store.root().display()
            ),
        )
        .with_default(true);
        Confirmation::from(ui.confirm(&prompt)?)
    };

    if !confirmation.is_granted() {
        ui.message("Operation cancelled");
        return Ok(0);
    }

    let verbose = ui.output_mode().shows_detail();
    let mut spinner = ui.start_spinner("Updating templates from GitHub...");
    let mut downloaded = 0usize;

    let outcome = store.reset(confirmation).and_then(|_| {
        Mirror::new(source, store)
            .with_delay(delay)
            .on_event(|event| match event {
                MirrorEvent::Listing { category } => {
                    let label = if category.is_empty() { "root" } else { *category };
                    spinner.set_message(&format!("Listing {}...", label));
                }
                MirrorEvent::Downloaded { name } => {
                    downloaded += 1;
                    if verbose {
                        spinner.set_message(&format!("Downloaded {}", name));
                    }
                }
                MirrorEvent::Skipped { target, .. } => {
                    tracing::debug!("Skipped {}", target);
                }
            })
            .mirror_all()
    });

    match outcome {
        Ok(report) => {
            spinner.finish_success(&format!(
                "Templates updated successfully! ({} downloaded)",
                downloaded
            ));
            show_mirror_report(&report, ui);
            Ok(0)
        }
        Err(e) => {
            spinner.finish_error("Update failed");
            ui.error(&format!("Error downloading templates: {}", e));
            Ok(1)
        }
    }
}
