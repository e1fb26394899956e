//! check-target command implementation

use std::path::Path;

use xcproj_core::{Session, target_exists};

use crate::error::Result;

/// Run the check-target command
///
/// Prints `1` when the project has a target named exactly `target`, `0`
/// otherwise. Nothing else goes to stdout.
pub fn run_check_target(project: &Path, target: &str) -> Result<bool> {
    let session = Session::open(project)?;
    let exists = target_exists(Some(session.project()), target);
    println!("{}", u8::from(exists));
    Ok(exists)
}
