//! Normalized path handling for project file references

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A path stored with `/` separators.
///
/// Project files always store paths with forward slashes, so every path that
/// is compared against or written into a project goes through this type.
/// Conversion to a platform-native path happens only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Wrap any path-like value, turning `\` separators into `/`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The path as a `PathBuf` for filesystem calls.
    pub fn to_native(&self) -> PathBuf {
        self.inner.clone().into()
    }

    /// Append `segment`.
    ///
    /// An absolute segment replaces the path, matching [`Path::join`].
    pub fn join(&self, segment: &str) -> Self {
        let segment = Self::new(segment).inner;
        if segment.starts_with('/') || self.inner.is_empty() {
            return Self { inner: segment };
        }
        let base = self.inner.strip_suffix('/').unwrap_or(&self.inner);
        Self {
            inner: format!("{base}/{segment}"),
        }
    }

    /// Everything before the last component; `/` is its own root.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        let (head, _) = trimmed.rsplit_once('/')?;
        match head {
            "" if trimmed.len() > 1 => Some(Self::new("/")),
            "" => None,
            head => Some(Self::new(head)),
        }
    }

    /// Last component, ignoring a trailing `/`.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        let name = trimmed.rsplit_once('/').map_or(trimmed, |(_, name)| name);
        (!name.is_empty()).then_some(name)
    }

    /// Text after the last `.` of the file name. Dotfiles have none.
    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.file_name()?.rsplit_once('.')?;
        (!stem.is_empty()).then_some(ext)
    }

    /// Whether the path starts at the filesystem root.
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/') || self.to_native().is_absolute()
    }

    /// Resolve `.` and `..` components lexically, without touching the disk.
    pub fn clean(&self) -> Self {
        let absolute = self.inner.starts_with('/');
        let mut parts: Vec<&str> = Vec::new();

        for part in self.inner.split('/') {
            match part {
                "" | "." => {}
                ".." => match parts.last() {
                    Some(&last) if last != ".." => {
                        parts.pop();
                    }
                    _ if absolute => {}
                    _ => parts.push(".."),
                },
                other => parts.push(other),
            }
        }

        let body = parts.join("/");
        let inner = match (absolute, body.is_empty()) {
            (true, _) => format!("/{}", body),
            (false, true) => ".".to_string(),
            (false, false) => body,
        };
        Self { inner }
    }

    /// Make the path absolute against the current directory, then clean it.
    ///
    /// The path does not need to exist.
    pub fn absolutize(&self) -> Result<Self> {
        if self.is_absolute() {
            return Ok(self.clean());
        }
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        Ok(Self::new(cwd).join(&self.inner).clean())
    }

    /// Canonicalize an existing path, resolving symlinks.
    pub fn canonicalize(&self) -> Result<Self> {
        let native = self.to_native();
        dunce::canonicalize(&native)
            .map(Self::new)
            .map_err(|e| Error::io(native, e))
    }

    /// Express this path relative to `base`, if it lies at or below it.
    ///
    /// Both paths are cleaned first. Returns an empty string when they are
    /// equal.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<String> {
        let this = self.clean();
        let base = base.clean();

        if this.inner == base.inner {
            return Some(String::new());
        }
        if base.inner == "/" {
            return this.inner.strip_prefix('/').map(str::to_string);
        }
        this.inner
            .strip_prefix(&base.inner)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(str::to_string)
    }

    pub fn exists(&self) -> bool {
        Path::new(&self.inner).exists()
    }

    pub fn is_dir(&self) -> bool {
        Path::new(&self.inner).is_dir()
    }

    pub fn is_file(&self) -> bool {
        Path::new(&self.inner).is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

macro_rules! from_path_like {
    ($($ty:ty),*) => {
        $(impl From<$ty> for NormalizedPath {
            fn from(value: $ty) -> Self {
                Self::new(value)
            }
        })*
    };
}

from_path_like!(&str, String, &Path, PathBuf);
