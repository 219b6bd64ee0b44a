//! addany CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use addany::cli::{Cli, CommandDispatcher};
use addany::config::find_project_root;
use addany::ui::{create_ui, is_ci, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so `preview --raw` and `list --json` stay clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("addany=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("addany=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Project root from `--project`, else discovered from the current directory.
fn project_root(explicit: Option<&PathBuf>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_default();
    match explicit {
        Some(dir) => std::path::absolute(dir).unwrap_or_else(|_| dir.clone()),
        None => find_project_root(&cwd).unwrap_or(cwd),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("addany starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = project_root(cli.project.as_ref());
    tracing::debug!("Project root: {}", project_root.display());

    let mut ui = create_ui(!is_ci(), output_mode);

    let dispatcher = CommandDispatcher::new(project_root).with_templates(cli.templates.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
