//! add-file-ref command implementation

use std::path::Path;

use colored::Colorize;
use xcproj_core::{MatchMode, ReconcileConfig, Session};
use xcproj_fs::NormalizedPath;

use crate::commands::{attach_to_named_target, group_segments, role_label};
use crate::error::{CliError, Result};

/// Run the add-file-ref command
///
/// References `file` from `group` (and `subfolder` below it, when given)
/// without copying anything, then attaches it to `target`.
pub fn run_add_file_ref(
    project: &Path,
    file: &str,
    target: &str,
    group: &str,
    subfolder: Option<&str>,
    match_mode: MatchMode,
    config: &ReconcileConfig,
) -> Result<()> {
    if file.trim().is_empty() {
        return Err(CliError::user("File name must not be empty"));
    }
    println!("{} Adding reference: {}", "=>".blue().bold(), file.cyan());

    let mut session = Session::open(project)?;
    let mut segments = group_segments(group);
    segments.extend(subfolder.map(group_segments).unwrap_or_default());

    let role = config.role_for(&NormalizedPath::new(file), &segments);
    let main_group = session.project().main_group()?;
    let mut reconciler = session.reconciler();
    let group_id = reconciler.ensure_group(&main_group, &segments)?;
    let file_ref = reconciler.ensure_file_reference(&group_id, file, match_mode)?;
    let attached = attach_to_named_target(&mut reconciler, target, &file_ref, role)?;
    session.save()?;

    if attached {
        println!(
            "{} {} referenced in {} ({}).",
            "OK".green().bold(),
            file.cyan(),
            target.cyan(),
            role_label(role)
        );
    } else {
        println!("{} {} referenced.", "OK".green().bold(), file.cyan());
    }
    Ok(())
}
