//! Well-known names inside an Xcode project bundle.

use std::path::Path;

use crate::{Error, NormalizedPath, Result};

/// Fixed path components of an Xcode project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The `project.pbxproj` description file inside the bundle
    Pbxproj,
    /// The `.xcodeproj` bundle extension (without the dot)
    BundleExtension,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pbxproj => "project.pbxproj",
            Self::BundleExtension => "xcodeproj",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Resolve a user-supplied project path to the `project.pbxproj` file.
///
/// Accepts the `.xcodeproj` bundle directory or the description file itself.
/// The result is absolute.
pub fn locate_pbxproj(path: &NormalizedPath) -> Result<NormalizedPath> {
    let candidate = if path.is_dir() {
        path.join(ProjectPath::Pbxproj.as_str())
    } else {
        path.clone()
    };

    if !candidate.is_file() {
        return Err(Error::ProjectNotFound {
            path: candidate.to_native(),
        });
    }

    candidate.canonicalize()
}

/// Directory that contains the `.xcodeproj` bundle of a description file.
///
/// Files referenced with `SOURCE_ROOT` and the main group resolve against it.
pub fn project_dir(pbxproj: &NormalizedPath) -> Option<NormalizedPath> {
    let bundle = pbxproj.parent()?;
    if bundle.extension() == Some(ProjectPath::BundleExtension.as_str()) {
        bundle.parent()
    } else {
        Some(bundle)
    }
}
