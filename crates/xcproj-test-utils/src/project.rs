//! [`TestProject`] builder for reconciler test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::fixtures;

/// A temporary directory holding one `.xcodeproj` bundle.
///
/// The bundle is written on construction; source files are added with
/// [`TestProject::write_file`].
///
/// # Example
///
/// ```rust,no_run
/// use xcproj_test_utils::project::TestProject;
///
/// let project = TestProject::app();
/// project.write_file("App/Extra.m", "");
/// project.assert_pbxproj_contains("main.m in Sources");
/// ```
pub struct TestProject {
    _temp_dir: TempDir,
    root: PathBuf,
    name: String,
}

impl TestProject {
    /// `App.xcodeproj` with the [`fixtures::APP_PROJECT`] content.
    pub fn app() -> Self {
        Self::with_content("App", fixtures::APP_PROJECT)
    }

    /// `App.xcodeproj` with no targets and an empty main group.
    pub fn empty() -> Self {
        Self::with_content("App", fixtures::EMPTY_PROJECT)
    }

    /// `<name>.xcodeproj` holding `content` as its project file.
    pub fn with_content(name: &str, content: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        // Resolve symlinked temp roots so paths compare equal to what the
        // tool canonicalizes
        let root = fs::canonicalize(temp_dir.path()).unwrap();

        let bundle = root.join(format!("{name}.xcodeproj"));
        fs::create_dir_all(&bundle).unwrap();
        fs::write(bundle.join("project.pbxproj"), content).unwrap();

        Self {
            _temp_dir: temp_dir,
            root,
            name: name.to_string(),
        }
    }

    /// Directory containing the bundle.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the `.xcodeproj` bundle.
    pub fn bundle_path(&self) -> PathBuf {
        self.root.join(format!("{}.xcodeproj", self.name))
    }

    /// Path of the `project.pbxproj` file inside the bundle.
    pub fn pbxproj_path(&self) -> PathBuf {
        self.bundle_path().join("project.pbxproj")
    }

    /// Current project file content.
    pub fn read_pbxproj(&self) -> String {
        fs::read_to_string(self.pbxproj_path()).unwrap()
    }

    /// Write `content` to `path` relative to the root, creating parents.
    ///
    /// Returns the absolute path.
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the project file contains `needle`.
    ///
    /// # Panics
    /// Panics with the full project text if it does not.
    pub fn assert_pbxproj_contains(&self, needle: &str) {
        let content = self.read_pbxproj();
        assert!(
            content.contains(needle),
            "Expected project file to contain '{}'.\nActual:\n{}",
            needle,
            content
        );
    }

    /// Assert that the project file does **not** contain `needle`.
    ///
    /// # Panics
    /// Panics with the full project text if it does.
    pub fn assert_pbxproj_not_contains(&self, needle: &str) {
        let content = self.read_pbxproj();
        assert!(
            !content.contains(needle),
            "Expected project file NOT to contain '{}'.\nActual:\n{}",
            needle,
            content
        );
    }
}
