//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod new;
pub mod preview;
pub mod workspace;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use workspace::{templates_dir, Workspace};
