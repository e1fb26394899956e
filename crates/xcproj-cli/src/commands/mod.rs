//! Command implementations for xcproj-cli

pub mod add_file;
pub mod add_file_ref;
pub mod check_target;
pub mod remove_file;

pub use add_file::{AddFileOptions, run_add_file};
pub use add_file_ref::run_add_file_ref;
pub use check_target::run_check_target;
pub use remove_file::run_remove_file;

use colored::Colorize;
use xcproj_core::{FileRole, ObjectId, ProjectFileReconciler, find_targets};

use crate::error::Result;

/// Split a group argument such as `Resources/Certs` into group names.
pub(crate) fn group_segments(group: &str) -> Vec<&str> {
    group.split('/').filter(|s| !s.is_empty()).collect()
}

/// Attach `file` to every target called `target`.
///
/// Returns whether the file was attached anywhere. A missing target is
/// reported but is not an error: the group and reference stay in place.
pub(crate) fn attach_to_named_target(
    reconciler: &mut ProjectFileReconciler<'_>,
    target: &str,
    file: &ObjectId,
    role: FileRole,
) -> Result<bool> {
    let targets = find_targets(reconciler.project(), target);
    if targets.is_empty() {
        tracing::warn!(target, "target not found; file was not attached");
        eprintln!(
            "{} Target '{}' not found; the file was not added to any build phase.",
            "warning:".yellow().bold(),
            target
        );
        return Ok(false);
    }

    if targets.len() > 1 {
        tracing::debug!(target, count = targets.len(), "attaching to every target with this name");
    }
    for target_id in &targets {
        reconciler.attach_to_target(target_id, file, role)?;
    }
    Ok(true)
}

/// Phase name shown to the user for a role.
pub(crate) fn role_label(role: FileRole) -> &'static str {
    match role {
        FileRole::CompileSource => "Sources",
        FileRole::Resource => "Resources",
    }
}
