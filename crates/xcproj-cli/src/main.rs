//! xcproj CLI
//!
//! Adds, checks and removes files in Xcode project files from the command
//! line.

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use xcproj_core::{MatchMode, ReconcileConfig};
use xcproj_fs::NormalizedPath;

use cli::{Cli, Commands, MatchArg};
use commands::AddFileOptions;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to initialise logging: {e}")))?;

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config.as_deref()),
        None => {
            // No command provided - show help hint
            println!("{} Xcode project file reconciler", "xcproj".green().bold());
            println!();
            println!("Run {} for available commands.", "xcproj --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        Commands::AddFile {
            project,
            target,
            file,
            group,
            yes,
            match_mode,
        } => {
            let config = load_config(config_path)?;
            let options = AddFileOptions {
                assume_yes: yes,
                match_mode: resolve_match(match_mode, &config),
            };
            commands::run_add_file(&project, &target, &file, &group, options, &config)?;
            Ok(())
        }
        Commands::CheckTarget { project, target } => {
            commands::run_check_target(&project, &target)?;
            Ok(())
        }
        Commands::AddFileRef {
            project,
            file,
            target,
            group,
            subfolder,
            match_mode,
        } => {
            let config = load_config(config_path)?;
            commands::run_add_file_ref(
                &project,
                &file,
                &target,
                &group,
                subfolder.as_deref(),
                resolve_match(match_mode, &config),
                &config,
            )
        }
        Commands::RemoveFile {
            project,
            file,
            group,
        } => {
            commands::run_remove_file(&project, &file, &group)?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ReconcileConfig> {
    let path = path.map(NormalizedPath::new);
    Ok(ReconcileConfig::load_or_default(path.as_ref())?)
}

/// `--match` wins over the configured mode.
fn resolve_match(arg: Option<MatchArg>, config: &ReconcileConfig) -> MatchMode {
    arg.map(MatchMode::from).unwrap_or(config.match_mode)
}
