//! Locked, crash-safe file writes and small copy helpers

use std::fs::{self, File, OpenOptions};
use std::io::{self as stdio, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{Error, Result};
use crate::path::NormalizedPath;

/// Replace `path` with `content` so readers see either the old or the new
/// file, never a torn one.
///
/// The bytes go to a sibling temp file held under an exclusive advisory lock,
/// are synced, and the temp file is then renamed over the target.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = path.to_native();
    if let Some(dir) = target.parent() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }

    let temp = temp_path_for(&target);
    let mut file = open_truncated(&temp)?;
    let lock_failed = |_| Error::LockFailed {
        path: target.clone(),
    };

    file.lock_exclusive().map_err(lock_failed)?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io(&temp, e))?;
    file.unlock().map_err(lock_failed)?;

    fs::rename(&temp, &target).map_err(|e| Error::io(&target, e))?;
    tracing::debug!(path = %path, bytes = content.len(), "wrote file atomically");
    Ok(())
}

/// `.<name>.<pid>.tmp` next to `target`, so the rename stays on one
/// filesystem.
fn temp_path_for(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

fn open_truncated(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))
}

pub fn read_text(path: &NormalizedPath) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path.to_native(), e))
}

/// [`write_atomic`] for UTF-8 text.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// `mkdir -p`.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path.to_native(), e))
}

/// Copy `source` into the directory `dest_dir`, keeping its file name.
///
/// Creates `dest_dir` when missing and overwrites an existing file of the
/// same name. Returns the destination.
pub fn copy_into(source: &NormalizedPath, dest_dir: &NormalizedPath) -> Result<NormalizedPath> {
    let Some(file_name) = source.file_name() else {
        let err = stdio::Error::new(stdio::ErrorKind::InvalidInput, "path has no file name");
        return Err(Error::io(source.to_native(), err));
    };

    ensure_dir(dest_dir)?;
    let dest = dest_dir.join(file_name);
    fs::copy(source, &dest).map_err(|e| Error::io(source.to_native(), e))?;
    tracing::debug!(from = %source, to = %dest, "copied file");

    Ok(dest)
}
