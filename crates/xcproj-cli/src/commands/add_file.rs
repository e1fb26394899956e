//! add-file command implementation
//!
//! Copies a file into `<project dir>/<group>/` and makes the project build
//! or bundle it.

use std::path::Path;

use colored::Colorize;
use xcproj_core::{MatchMode, ReconcileConfig, Session};
use xcproj_fs::{NormalizedPath, io};

use crate::commands::{attach_to_named_target, group_segments, role_label};
use crate::error::{CliError, Result};
use crate::interactive::confirm_overwrite;

/// Flags for [`run_add_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddFileOptions {
    /// Overwrite an existing copy without asking
    pub assume_yes: bool,
    pub match_mode: MatchMode,
}

/// Run the add-file command
///
/// Returns `false` when the user declined to overwrite an existing copy, in
/// which case the project is left untouched.
pub fn run_add_file(
    project: &Path,
    target: &str,
    file: &Path,
    group: &str,
    options: AddFileOptions,
    config: &ReconcileConfig,
) -> Result<bool> {
    let source = NormalizedPath::new(file).absolutize()?;
    println!("{} Adding file: {}", "=>".blue().bold(), source.as_str().cyan());

    if !source.is_file() {
        return Err(CliError::user(format!("Source file not found: {}", source)));
    }
    let file_name = source
        .file_name()
        .ok_or_else(|| CliError::user(format!("Not a file path: {}", source)))?
        .to_string();

    let mut session = Session::open(project)?;
    let segments = group_segments(group);
    let dest_dir = segments
        .iter()
        .fold(session.project_dir(), |dir, segment| dir.join(segment));
    let destination = dest_dir.join(&file_name);

    let in_place = is_same_file(&source, &destination);
    if destination.exists() && !in_place && !confirm_overwrite(&destination, options.assume_yes)? {
        println!(
            "{} {} was not overwritten.",
            "!!".yellow().bold(),
            destination
        );
        return Ok(false);
    }

    if in_place {
        tracing::debug!(path = %destination, "file already in place, not copying");
    } else {
        io::copy_into(&source, &dest_dir)?;
    }

    let role = config.role_for(&destination, &segments);
    let main_group = session.project().main_group()?;
    let mut reconciler = session.reconciler();
    let group_id = reconciler.ensure_group(&main_group, &segments)?;
    let file_ref =
        reconciler.ensure_file_reference(&group_id, destination.as_str(), options.match_mode)?;
    let attached = attach_to_named_target(&mut reconciler, target, &file_ref, role)?;
    session.save()?;

    if attached {
        println!(
            "{} {} added to {} ({}).",
            "OK".green().bold(),
            file_name.cyan(),
            target.cyan(),
            role_label(role)
        );
    } else {
        println!("{} {} added to the project.", "OK".green().bold(), file_name.cyan());
    }
    Ok(true)
}

/// Whether two paths name the same existing file.
fn is_same_file(a: &NormalizedPath, b: &NormalizedPath) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
