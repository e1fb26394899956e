//! Open/save lifecycle for one project file
//!
//! A [`Session`] owns the project loaded from disk for the length of one
//! command. Nothing is written until [`Session::save`] is called, so a
//! command that fails part way leaves the file untouched.

use xcproj_fs::constants::{locate_pbxproj, project_dir};
use xcproj_fs::{NormalizedPath, ProjectPath, io};

use crate::error::{Error, Result};
use crate::project::Project;
use crate::reconcile::ProjectFileReconciler;

/// A project opened from disk.
#[derive(Debug)]
pub struct Session {
    path: NormalizedPath,
    project: Project,
}

impl Session {
    /// Open a project from its `.xcodeproj` bundle or `project.pbxproj` file.
    pub fn open(path: impl Into<NormalizedPath>) -> Result<Self> {
        let requested: NormalizedPath = path.into();
        let path = locate_pbxproj(&requested)?;
        let content = io::read_text(&path)?;

        let root = xcproj_plist::parse(&content).map_err(|source| Error::Parse {
            path: path.to_native(),
            source,
        })?;

        let source_root = project_dir(&path)
            .ok_or_else(|| Error::invalid(format!("{} has no parent directory", path)))?;
        let project = Project::from_plist(root, source_root, bundle_name(&path))?;

        tracing::debug!(path = %path, "opened project");
        Ok(Self { path, project })
    }

    /// Path of the `project.pbxproj` file this session writes.
    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// Directory the main group resolves against.
    ///
    /// This is the directory holding the `.xcodeproj` bundle, moved by the
    /// project's `projectDirPath` when that is set. Files copied here get
    /// group-relative references.
    pub fn project_dir(&self) -> NormalizedPath {
        self.project.project_dir()
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn reconciler(&mut self) -> ProjectFileReconciler<'_> {
        ProjectFileReconciler::new(&mut self.project)
    }

    /// Serialize the project and atomically replace the file.
    pub fn save(&self) -> Result<()> {
        io::write_text(&self.path, &self.project.to_pbxproj())?;
        tracing::info!(path = %self.path, "saved project");
        Ok(())
    }
}

/// `App` for `.../App.xcodeproj/project.pbxproj`.
fn bundle_name(pbxproj: &NormalizedPath) -> Option<String> {
    let bundle = pbxproj.parent()?;
    let file_name = bundle.file_name()?;
    file_name
        .strip_suffix(ProjectPath::BundleExtension.as_str())
        .and_then(|stem| stem.strip_suffix('.'))
        .map(str::to_string)
}
