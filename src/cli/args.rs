//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::templates::FileType;

/// addany - Create new files pre-filled from templates.
#[derive(Debug, Parser)]
#[command(name = "addany")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Templates directory (overrides config and the folder beside the binary)
    #[arg(short, long, global = true, env = "ADDANY_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create new files and folders from templates
    New(NewArgs),

    /// Show the template and content a new file would get
    Preview(PreviewArgs),

    /// List available templates
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NewArgs {
    /// Comma-separated names; a trailing `/` creates a folder
    pub names: Option<String>,

    /// Kind of file to create
    #[arg(short = 'T', long = "type", value_enum)]
    pub file_type: Option<FileType>,

    /// Directory to create the items in (defaults to the current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for the `preview` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PreviewArgs {
    /// File that would be created
    pub file: PathBuf,

    /// Kind of file to preview
    #[arg(short = 'T', long = "type", value_enum)]
    pub file_type: Option<FileType>,

    /// Print only the resolved content
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
