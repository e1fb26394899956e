//! Group, file reference and target reconciliation
//!
//! Every operation here is idempotent: it looks before it creates, so running
//! the same command twice leaves the project as the first run did.

use serde::{Deserialize, Serialize};
use xcproj_fs::NormalizedPath;
use xcproj_plist::{Dictionary, Value};

use crate::error::{Error, Result};
use crate::file_type::last_known_file_type;
use crate::id::ObjectId;
use crate::isa::Isa;
use crate::project::Project;

/// `buildActionMask` Xcode gives new build phases.
const DEFAULT_BUILD_ACTION_MASK: &str = "2147483647";

/// How an existing file reference is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// The reference's real path equals the requested path, resolved
    /// against the group
    #[default]
    #[serde(rename = "exact")]
    ExactResolvedPath,
    /// The reference's real path contains the requested text
    #[serde(rename = "contains")]
    PathContainsName,
}

/// What a target does with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// Compiled in the sources phase
    CompileSource,
    /// Copied in the resources phase
    Resource,
}

impl FileRole {
    /// Kind of the build phase holding files with this role.
    pub fn phase_isa(self) -> Isa {
        match self {
            FileRole::CompileSource => Isa::SourcesBuildPhase,
            FileRole::Resource => Isa::ResourcesBuildPhase,
        }
    }

    fn other(self) -> Self {
        match self {
            FileRole::CompileSource => FileRole::Resource,
            FileRole::Resource => FileRole::CompileSource,
        }
    }
}

/// Whether `project` has a target named exactly `name`.
///
/// An absent project has no targets.
pub fn target_exists(project: Option<&Project>, name: &str) -> bool {
    project.is_some_and(|project| find_target(project, name).is_some())
}

/// The first target named exactly `name`.
pub fn find_target(project: &Project, name: &str) -> Option<ObjectId> {
    find_targets(project, name).into_iter().next()
}

/// Every target named exactly `name`, in project order.
pub fn find_targets(project: &Project, name: &str) -> Vec<ObjectId> {
    project
        .targets()
        .into_iter()
        .filter(|id| project.object(id).and_then(|o| o.get_str("name")) == Some(name))
        .collect()
}

/// Applies group, file and target mutations to one project.
pub struct ProjectFileReconciler<'p> {
    project: &'p mut Project,
}

impl<'p> ProjectFileReconciler<'p> {
    pub fn new(project: &'p mut Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &*self.project
    }

    /// Walk `segments` from `root`, creating missing groups.
    ///
    /// Returns the deepest group; an empty path returns `root`.
    pub fn ensure_group(&mut self, root: &ObjectId, segments: &[&str]) -> Result<ObjectId> {
        self.expect_group(root)?;
        let mut current = root.clone();

        for segment in segments {
            current = match self.child_group(&current, segment) {
                Some(existing) => existing,
                None => {
                    let mut group = Dictionary::new();
                    group.insert("isa", Isa::Group.as_str());
                    group.insert("children", Value::Array(Vec::new()));
                    group.insert("name", *segment);
                    group.insert("sourceTree", "<group>");
                    let created = self.project.insert_object(group);
                    self.project.push_id(&current, "children", &created)?;
                    tracing::info!(group = %segment, id = %created, "created group");
                    created
                }
            };
        }

        Ok(current)
    }

    /// Walk `segments` from `root` without creating anything.
    pub fn find_group(&self, root: &ObjectId, segments: &[&str]) -> Option<ObjectId> {
        segments
            .iter()
            .try_fold(root.clone(), |current, segment| self.child_group(&current, segment))
    }

    /// Find or create the file reference for `file_path` under `group`.
    ///
    /// Relative paths resolve against the group's real path. A new
    /// reference is group-relative when the file lies below the group and
    /// absolute otherwise.
    pub fn ensure_file_reference(
        &mut self,
        group: &ObjectId,
        file_path: &str,
        mode: MatchMode,
    ) -> Result<ObjectId> {
        self.expect_group(group)?;
        if file_path.trim().is_empty() {
            return Err(Error::InvalidFilePath {
                path: file_path.to_string(),
            });
        }

        if let Some(existing) = self.find_file_reference(group, file_path, mode) {
            tracing::debug!(path = %file_path, id = %existing, "file reference already present");
            return Ok(existing);
        }

        let group_dir = self.project.real_path(group);
        let target = resolve_against(&group_dir, file_path);
        if target == group_dir {
            return Err(Error::InvalidFilePath {
                path: file_path.to_string(),
            });
        }
        let file_name = target.file_name().unwrap_or(file_path).to_string();

        let (source_tree, stored_path) = match target.relative_to(&group_dir) {
            Some(relative) if !relative.is_empty() => ("<group>", relative),
            _ => ("<absolute>", target.as_str().to_string()),
        };

        let mut reference = Dictionary::new();
        reference.insert("isa", Isa::FileReference.as_str());
        reference.insert("lastKnownFileType", last_known_file_type(target.extension()));
        if stored_path != file_name {
            reference.insert("name", file_name.as_str());
        }
        reference.insert("path", stored_path.as_str());
        reference.insert("sourceTree", source_tree);

        let created = self.project.insert_object(reference);
        self.project.push_id(group, "children", &created)?;
        tracing::info!(path = %stored_path, source_tree, id = %created, "created file reference");

        Ok(created)
    }

    /// The first direct file child of `group` matching `file_path`.
    pub fn find_file_reference(
        &self,
        group: &ObjectId,
        file_path: &str,
        mode: MatchMode,
    ) -> Option<ObjectId> {
        let group_dir = self.project.real_path(group);
        let wanted = match mode {
            MatchMode::ExactResolvedPath => Some(resolve_against(&group_dir, file_path)),
            MatchMode::PathContainsName => None,
        };

        self.file_children(group).into_iter().find(|file| {
            let real = self.project.child_real_path(&group_dir, file);
            match &wanted {
                Some(wanted) => real == *wanted,
                None => real.as_str().contains(file_path),
            }
        })
    }

    /// Make `target` build `file_ref` in the phase for `role`.
    ///
    /// Creates the phase when the target lacks one. A binding of the same
    /// file in the opposite role's phase of this target is removed, so the
    /// file ends up in exactly one of them. Returns the build file id.
    pub fn attach_to_target(
        &mut self,
        target: &ObjectId,
        file_ref: &ObjectId,
        role: FileRole,
    ) -> Result<ObjectId> {
        if !self.project.isa(target).is_some_and(|isa| isa.is_target()) {
            return Err(self.kind_error(target, "target"));
        }
        if !self.project.contains(file_ref) {
            return Err(Error::ObjectNotFound {
                id: file_ref.to_string(),
            });
        }

        if let Some(conflicting) = self.phase_of(target, role.other()) {
            for build_file in self.build_files_for(&conflicting, file_ref) {
                tracing::info!(id = %build_file, "moving file out of {:?} phase", role.other());
                self.remove_build_file(&build_file);
            }
        }

        let phase = match self.phase_of(target, role) {
            Some(phase) => phase,
            None => self.create_phase(target, role)?,
        };

        if let Some(existing) = self.build_files_for(&phase, file_ref).into_iter().next() {
            tracing::debug!(file = %file_ref, phase = %phase, "already attached");
            return Ok(existing);
        }

        let mut build_file = Dictionary::new();
        build_file.insert("isa", Isa::BuildFile.as_str());
        build_file.insert("fileRef", file_ref.as_str());
        let created = self.project.insert_object(build_file);
        self.project.push_id(&phase, "files", &created)?;
        tracing::info!(file = %file_ref, phase = %phase, ?role, "attached file to target");

        Ok(created)
    }

    /// Remove the first file under `group` whose real path contains
    /// `fragment`, together with every build file that references it.
    ///
    /// Returns `false` without changes when nothing matches.
    pub fn detach_from_group(&mut self, group: &ObjectId, fragment: &str) -> Result<bool> {
        self.expect_group(group)?;

        let Some(file) = self.find_file_reference(group, fragment, MatchMode::PathContainsName)
        else {
            tracing::debug!(fragment, group = %group, "no matching file to remove");
            return Ok(false);
        };

        let build_files: Vec<ObjectId> = self
            .project
            .referrers(&file)
            .into_iter()
            .filter(|id| self.project.isa(id) == Some(Isa::BuildFile))
            .collect();
        for build_file in &build_files {
            self.remove_build_file(build_file);
        }

        self.project.purge_references(&file);
        self.project.remove_object(&file);
        tracing::info!(
            file = %file,
            build_files = build_files.len(),
            "removed file reference"
        );

        Ok(true)
    }

    fn expect_group(&self, id: &ObjectId) -> Result<()> {
        if self.project.isa(id).is_some_and(|isa| isa.is_group()) {
            Ok(())
        } else {
            Err(self.kind_error(id, "group"))
        }
    }

    fn kind_error(&self, id: &ObjectId, expected: &str) -> Error {
        match self.project.isa(id) {
            Some(isa) => Error::UnexpectedKind {
                id: id.to_string(),
                expected: expected.to_string(),
                found: isa.to_string(),
            },
            None => Error::ObjectNotFound { id: id.to_string() },
        }
    }

    fn child_group(&self, parent: &ObjectId, name: &str) -> Option<ObjectId> {
        self.project.children(parent).into_iter().find(|child| {
            self.project.isa(child).is_some_and(|isa| isa.is_group())
                && self.project.display_name(child).as_deref() == Some(name)
        })
    }

    fn file_children(&self, group: &ObjectId) -> Vec<ObjectId> {
        self.project
            .children(group)
            .into_iter()
            .filter(|child| self.project.isa(child) == Some(Isa::FileReference))
            .collect()
    }

    fn phase_of(&self, target: &ObjectId, role: FileRole) -> Option<ObjectId> {
        let wanted = role.phase_isa();
        self.project
            .id_list(target, "buildPhases")
            .into_iter()
            .find(|phase| self.project.isa(phase).as_ref() == Some(&wanted))
    }

    fn create_phase(&mut self, target: &ObjectId, role: FileRole) -> Result<ObjectId> {
        let mut phase = Dictionary::new();
        phase.insert("isa", role.phase_isa().as_str());
        phase.insert("buildActionMask", DEFAULT_BUILD_ACTION_MASK);
        phase.insert("files", Value::Array(Vec::new()));
        phase.insert("runOnlyForDeploymentPostprocessing", "0");
        let created = self.project.insert_object(phase);
        self.project.push_id(target, "buildPhases", &created)?;
        tracing::info!(target = %target, phase = %created, ?role, "created build phase");
        Ok(created)
    }

    fn build_files_for(&self, phase: &ObjectId, file_ref: &ObjectId) -> Vec<ObjectId> {
        self.project
            .id_list(phase, "files")
            .into_iter()
            .filter(|build_file| {
                self.project
                    .object(build_file)
                    .and_then(|o| o.get_str("fileRef"))
                    == Some(file_ref.as_str())
            })
            .collect()
    }

    fn remove_build_file(&mut self, build_file: &ObjectId) {
        self.project.purge_references(build_file);
        self.project.remove_object(build_file);
    }
}

fn resolve_against(base: &NormalizedPath, file_path: &str) -> NormalizedPath {
    let path = NormalizedPath::new(file_path);
    if path.is_absolute() {
        path.clean()
    } else {
        base.join(path.as_str()).clean()
    }
}
