//! remove-file command implementation

use std::path::Path;

use colored::Colorize;
use xcproj_core::Session;

use crate::commands::group_segments;
use crate::error::Result;

/// Run the remove-file command
///
/// Removes the first file under `group` whose path contains `file`, along
/// with the build files that compile or copy it. A missing group or file is
/// reported and leaves the project file as it was.
pub fn run_remove_file(project: &Path, file: &str, group: &str) -> Result<bool> {
    println!(
        "{} Removing file: {} from {}",
        "=>".blue().bold(),
        file.cyan(),
        group.cyan()
    );

    let mut session = Session::open(project)?;
    let main_group = session.project().main_group()?;
    let mut reconciler = session.reconciler();

    let Some(group_id) = reconciler.find_group(&main_group, &group_segments(group)) else {
        tracing::debug!(group, "group not found");
        println!("{} Group {} not found; nothing removed.", "OK".green().bold(), group.cyan());
        return Ok(false);
    };

    if !reconciler.detach_from_group(&group_id, file)? {
        println!(
            "{} No file matching {} in {}; nothing removed.",
            "OK".green().bold(),
            file.cyan(),
            group.cyan()
        );
        return Ok(false);
    }

    session.save()?;
    println!("{} {} removed.", "OK".green().bold(), file.cyan());
    Ok(true)
}
