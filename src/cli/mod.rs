//! Command-line interface for addany.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ListArgs, NewArgs, PreviewArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, Workspace};
