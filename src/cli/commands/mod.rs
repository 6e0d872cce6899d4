//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - A default action (`gitignore Go`) next to subcommands (`gitignore list`)
//! - Shared configuration handling
//! - Consistent global flag handling

pub mod clean;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod get;
pub mod list;
pub mod path;
pub mod update;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
