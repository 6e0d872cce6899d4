//! Default command: write a template to a file.
//!
//! `gitignore <NAME> [OUTPUT]` resolves `NAME` locally, falls back to the
//! remote probe, and writes the result to `OUTPUT` (default `.gitignore`).

use crate::cli::args::GetArgs;
use crate::config::Config;
use crate::error::Result;
use crate::remote::ContentSource;
use crate::session::{write_template, Origin, Session};
use crate::store::{Confirmation, Store};
use crate::ui::{Prompt, UserInterface};

use super::display::{show_load_report, LIST_HINT};
use super::dispatcher::{Command, CommandResult};

/// The default command implementation.
pub struct GetCommand {
    config: Config,
    args: GetArgs,
}

impl GetCommand {
    /// Create a new get command.
    pub fn new(config: Config, args: GetArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &GetArgs {
        &self.args
    }
}

impl Command for GetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(name) = self.args.name.as_deref() else {
            ui.error("No template name given");
            ui.show_hint(LIST_HINT);
            return Ok(CommandResult::failure(2));
        };

        let store = self.config.store()?;
        let remote = if self.args.offline {
            None
        } else {
            Some(self.config.remote()?)
        };
        let source = remote.as_ref().map(|r| r as &dyn ContentSource);

        let mut session = open_session(store, source, &self.config)?;
        show_load_report(session.report(), ui);

        get_template(&mut session, name, source, &self.args, ui)
    }
}

/// Load a session, mirroring first if configured and the store is empty.
pub(crate) fn open_session(
    store: Store,
    source: Option<&dyn ContentSource>,
    config: &Config,
) -> Result<Session> {
    match source {
        Some(source) if config.mirror_when_empty => {
            Session::bootstrap(store, source, config.download_delay())
        }
        _ => Session::load(store),
    }
}

/// Resolve `name` and deliver it as `args` asks.
pub fn get_template(
    session: &mut Session,
    name: &str,
    source: Option<&dyn ContentSource>,
    args: &GetArgs,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let resolved = match session.resolve(name, source) {
        Ok(resolved) => resolved,
        Err(e) if e.is_not_found() => {
            ui.error(&format!("No template found for '{}'", name));
            ui.show_hint(LIST_HINT);
            return Ok(CommandResult::failure(1));
        }
        Err(e) => return Err(e),
    };

    if let Origin::Remote { path } = &resolved.origin {
        tracing::debug!("Cached {} at {}", resolved.name, path.display());
    }

    let variants = session.registry().case_variants(name);
    if variants.len() > 1 && !variants.contains(&name) {
        ui.warning(&format!(
            "'{}' matches {}; using '{}'",
            name,
            variants.join(", "),
            resolved.name
        ));
    }

    if args.stdout {
        ui.raw(&resolved.content);
        return Ok(CommandResult::success());
    }

    let output = args.output.as_path();
    let overwrite = if args.force || !output.exists() {
        Confirmation::Granted
    } else {
        let prompt = Prompt::new(
            "overwrite",
            format!("File '{}' already exists. Overwrite?", output.display()),
        );
        Confirmation::from(ui.confirm(&prompt)?)
    };

    if !write_template(output, &resolved.content, overwrite)? {
        ui.message("Operation cancelled");
        return Ok(CommandResult::success());
    }

    ui.success(&format!(
        "Successfully created gitignore for '{}' at '{}'",
        resolved.name,
        output.display()
    ));
    Ok(CommandResult::success())
}
