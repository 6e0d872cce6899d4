//! Shared display helpers.
//!
//! Used by `list`, the default template command and `update` to render
//! registry contents and store diagnostics consistently.

use std::fmt::Write;

use serde::Serialize;

use crate::registry::{LoadReport, Registry};
use crate::remote::MirrorReport;
use crate::ui::UserInterface;

/// Hint shown whenever a template cannot be found.
pub const LIST_HINT: &str = "Try 'gitignore list' to see all available templates";

/// Render the grouped listing: a count line, then one block per group.
pub fn render_listing(registry: &Registry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Available templates ({}):", registry.len());

    for (group, names) in registry.grouped() {
        let _ = writeln!(out, "\n{}:", group);
        for name in names {
            let _ = writeln!(out, "  - {}", name);
        }
    }

    out
}

/// JSON shape of `list --json`.
#[derive(Debug, Serialize)]
pub struct ListingJson<'a> {
    /// Number of templates.
    pub count: usize,
    /// Qualified names, sorted.
    pub templates: Vec<&'a str>,
    /// Base names by group.
    pub groups: std::collections::BTreeMap<&'a str, Vec<&'a str>>,
}

impl<'a> ListingJson<'a> {
    /// Build the JSON view of a registry.
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            count: registry.len(),
            templates: registry.names(),
            groups: registry.grouped(),
        }
    }
}

/// Warn about anything the loader skipped. Only shown in verbose mode.
pub fn show_load_report(report: &LoadReport, ui: &mut dyn UserInterface) {
    if report.is_clean() || !ui.output_mode().shows_detail() {
        return;
    }

    for skipped in &report.skipped {
        ui.warning(&format!(
            "Skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        ));
    }
    for alias in &report.unresolved_aliases {
        ui.warning(&format!("{} refers to a template that does not exist", alias));
    }
}

/// Summarize a mirror run.
pub fn show_mirror_report(report: &MirrorReport, ui: &mut dyn UserInterface) {
    for failure in &report.failures {
        ui.warning(&format!("Failed to download {}: {}", failure.target, failure.message));
    }
}
