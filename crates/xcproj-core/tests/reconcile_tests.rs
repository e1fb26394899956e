//! Group, file and target reconciliation over in-memory projects

use pretty_assertions::assert_eq;
use rstest::rstest;
use xcproj_core::{
    Error, FileRole, Isa, MatchMode, ObjectId, Project, ProjectFileReconciler, ReconcileConfig,
    find_target, target_exists,
};
use xcproj_fs::NormalizedPath;
use xcproj_test_utils::fixtures;

fn app_project() -> Project {
    let root = xcproj_plist::parse(fixtures::APP_PROJECT).unwrap();
    Project::from_plist(root, NormalizedPath::new("/work"), Some("App".to_string())).unwrap()
}

fn empty_project() -> Project {
    let root = xcproj_plist::parse(fixtures::EMPTY_PROJECT).unwrap();
    Project::from_plist(root, NormalizedPath::new("/work"), Some("App".to_string())).unwrap()
}

fn id(s: &str) -> ObjectId {
    ObjectId::from(s)
}

fn count_of(project: &Project, isa: Isa) -> usize {
    project.objects_where(|candidate| *candidate == isa).len()
}

/// Build files in `phase` that point at `file_ref`.
fn bindings(project: &Project, phase: &ObjectId, file_ref: &ObjectId) -> usize {
    project
        .id_list(phase, "files")
        .iter()
        .filter(|bf| {
            project.object(bf).and_then(|o| o.get_str("fileRef")) == Some(file_ref.as_str())
        })
        .count()
}

// =====================================================================
// ensure_group
// =====================================================================

#[test]
fn test_ensure_group_is_idempotent() {
    let mut project = app_project();
    let main = project.main_group().unwrap();
    let before = project.children(&main).len();

    let mut reconciler = ProjectFileReconciler::new(&mut project);
    let first = reconciler.ensure_group(&main, &["Resources", "Certs"]).unwrap();
    let second = reconciler.ensure_group(&main, &["Resources", "Certs"]).unwrap();

    assert_eq!(first, second);
    assert_eq!(project.children(&main).len(), before + 1);
    assert_eq!(count_of(&project, Isa::Group), 5);
}

#[test]
fn test_ensure_group_reuses_group_named_by_path() {
    let mut project = app_project();
    let main = project.main_group().unwrap();

    let group = ProjectFileReconciler::new(&mut project)
        .ensure_group(&main, &["App"])
        .unwrap();

    assert_eq!(group, id(fixtures::APP_SOURCE_GROUP));
}

#[test]
fn test_ensure_group_creates_named_group_tree() {
    let mut project = empty_project();
    let main = project.main_group().unwrap();

    let leaf = ProjectFileReconciler::new(&mut project)
        .ensure_group(&main, &["Resources", "Certs"])
        .unwrap();

    let object = project.object(&leaf).unwrap();
    assert_eq!(object.get_str("isa"), Some("PBXGroup"));
    assert_eq!(object.get_str("name"), Some("Certs"));
    assert_eq!(object.get_str("sourceTree"), Some("<group>"));
    assert_eq!(object.get_array("children").map(<[_]>::len), Some(0));

    let parent = project.parent_of(&leaf).unwrap();
    assert_eq!(project.display_name(&parent).as_deref(), Some("Resources"));
    assert_eq!(project.parent_of(&parent), Some(main));
}

#[test]
fn test_ensure_group_with_empty_path_returns_root() {
    let mut project = empty_project();
    let main = project.main_group().unwrap();

    let group = ProjectFileReconciler::new(&mut project).ensure_group(&main, &[]).unwrap();
    assert_eq!(group, main);
}

#[test]
fn test_ensure_group_rejects_non_group_root() {
    let mut project = app_project();
    let err = ProjectFileReconciler::new(&mut project)
        .ensure_group(&id(fixtures::APP_MAIN_FILE), &["X"])
        .unwrap_err();
    assert!(matches!(err, Error::UnexpectedKind { .. }));
}

#[test]
fn test_find_group_does_not_create() {
    let mut project = app_project();
    let main = project.main_group().unwrap();
    let snapshot = project.clone();

    let reconciler = ProjectFileReconciler::new(&mut project);
    assert_eq!(
        reconciler.find_group(&main, &["App"]),
        Some(id(fixtures::APP_SOURCE_GROUP))
    );
    assert_eq!(reconciler.find_group(&main, &["Missing"]), None);
    assert_eq!(project, snapshot);
}

// =====================================================================
// ensure_file_reference
// =====================================================================

#[test]
fn test_existing_reference_found_by_resolved_path() {
    let mut project = app_project();
    let group = id(fixtures::APP_SOURCE_GROUP);
    let before = count_of(&project, Isa::FileReference);

    let mut reconciler = ProjectFileReconciler::new(&mut project);
    let by_relative = reconciler
        .ensure_file_reference(&group, "main.m", MatchMode::ExactResolvedPath)
        .unwrap();
    let by_absolute = reconciler
        .ensure_file_reference(&group, "/work/App/main.m", MatchMode::ExactResolvedPath)
        .unwrap();

    assert_eq!(by_relative, id(fixtures::APP_MAIN_FILE));
    assert_eq!(by_absolute, id(fixtures::APP_MAIN_FILE));
    assert_eq!(count_of(&project, Isa::FileReference), before);
}

#[test]
fn test_new_reference_below_group_is_group_relative() {
    let mut project = app_project();
    let group = id(fixtures::APP_SOURCE_GROUP);
    let before = count_of(&project, Isa::FileReference);

    let mut reconciler = ProjectFileReconciler::new(&mut project);
    let first = reconciler
        .ensure_file_reference(&group, "Views/List.swift", MatchMode::ExactResolvedPath)
        .unwrap();
    let second = reconciler
        .ensure_file_reference(&group, "Views/List.swift", MatchMode::ExactResolvedPath)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(count_of(&project, Isa::FileReference), before + 1);

    let object = project.object(&first).unwrap();
    assert_eq!(object.get_str("path"), Some("Views/List.swift"));
    assert_eq!(object.get_str("name"), Some("List.swift"));
    assert_eq!(object.get_str("sourceTree"), Some("<group>"));
    assert_eq!(object.get_str("lastKnownFileType"), Some("sourcecode.swift"));
    assert_eq!(project.real_path(&first).as_str(), "/work/App/Views/List.swift");
    assert!(project.children(&group).contains(&first));
}

#[test]
fn test_new_reference_outside_group_is_absolute() {
    let mut project = app_project();
    let group = id(fixtures::APP_SOURCE_GROUP);

    let file = ProjectFileReconciler::new(&mut project)
        .ensure_file_reference(&group, "/etc/certs/server.pem", MatchMode::ExactResolvedPath)
        .unwrap();

    let object = project.object(&file).unwrap();
    assert_eq!(object.get_str("path"), Some("/etc/certs/server.pem"));
    assert_eq!(object.get_str("name"), Some("server.pem"));
    assert_eq!(object.get_str("sourceTree"), Some("<absolute>"));
    assert_eq!(project.real_path(&file).as_str(), "/etc/certs/server.pem");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case(".")]
#[case("/work/App")]
fn test_path_naming_the_group_itself_is_rejected(#[case] file_path: &str) {
    let mut project = app_project();
    let snapshot = project.clone();

    let err = ProjectFileReconciler::new(&mut project)
        .ensure_file_reference(
            &id(fixtures::APP_SOURCE_GROUP),
            file_path,
            MatchMode::ExactResolvedPath,
        )
        .unwrap_err();

    assert!(matches!(err, Error::InvalidFilePath { .. }));
    assert_eq!(project, snapshot);
}

#[test]
fn test_lookup_in_large_project_stays_fast() {
    let mut project = empty_project();
    let main = project.main_group().unwrap();

    let mut reconciler = ProjectFileReconciler::new(&mut project);
    let mut groups = Vec::new();
    for g in 0..100 {
        let name = format!("Module{g}");
        groups.push(reconciler.ensure_group(&main, &[name.as_str()]).unwrap());
    }
    drop(reconciler);
    for (g, group) in groups.iter().enumerate() {
        for f in 0..100 {
            let mut file = xcproj_plist::Dictionary::new();
            file.insert("isa", "PBXFileReference");
            file.insert("path", format!("File{g}_{f}.swift"));
            file.insert("sourceTree", "<group>");
            let created = project.insert_object(file);
            project.push_id(group, "children", &created).unwrap();
        }
    }
    assert!(count_of(&project, Isa::FileReference) >= 10_000);

    let target_group = groups[57].clone();
    let started = std::time::Instant::now();
    let mut reconciler = ProjectFileReconciler::new(&mut project);
    let existing = reconciler
        .find_file_reference(&target_group, "File57_99.swift", MatchMode::ExactResolvedPath)
        .unwrap();
    let created = reconciler
        .ensure_file_reference(&target_group, "New.swift", MatchMode::ExactResolvedPath)
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(project.real_path(&existing).as_str(), "/work/File57_99.swift");
    assert_eq!(project.parent_of(&created), Some(target_group));
    assert!(elapsed.as_secs() < 2, "lookup took {elapsed:?}");
}

#[test]
fn test_plain_file_name_has_no_separate_name_key() {
    let mut project = empty_project();
    let main = project.main_group().unwrap();

    let file = ProjectFileReconciler::new(&mut project)
        .ensure_file_reference(&main, "License.txt", MatchMode::ExactResolvedPath)
        .unwrap();

    let object = project.object(&file).unwrap();
    assert_eq!(object.get_str("path"), Some("License.txt"));
    assert_eq!(object.get("name"), None);
    assert_eq!(object.get_str("lastKnownFileType"), Some("text"));
}

#[rstest]
#[case(MatchMode::PathContainsName, "main", true)]
#[case(MatchMode::PathContainsName, "App/main.m", true)]
#[case(MatchMode::ExactResolvedPath, "main", false)]
#[case(MatchMode::ExactResolvedPath, "App/main.m", false)]
fn test_match_modes(#[case] mode: MatchMode, #[case] query: &str, #[case] matches: bool) {
    let mut project = app_project();
    let reconciler = ProjectFileReconciler::new(&mut project);

    let found = reconciler.find_file_reference(&id(fixtures::APP_SOURCE_GROUP), query, mode);
    assert_eq!(found == Some(id(fixtures::APP_MAIN_FILE)), matches);
}

// =====================================================================
// attach_to_target
// =====================================================================

#[test]
fn test_attach_is_idempotent() {
    let mut project = app_project();
    let target = find_target(&project, "App").unwrap();
    let sources = id(fixtures::APP_SOURCES_PHASE);
    let group = id(fixtures::APP_SOURCE_GROUP);

    let mut reconciler = ProjectFileReconciler::new(&mut project);
    let file = reconciler
        .ensure_file_reference(&group, "Extra.m", MatchMode::ExactResolvedPath)
        .unwrap();
    let first = reconciler.attach_to_target(&target, &file, FileRole::CompileSource).unwrap();
    let second = reconciler.attach_to_target(&target, &file, FileRole::CompileSource).unwrap();

    assert_eq!(first, second);
    assert_eq!(bindings(&project, &sources, &file), 1);
    assert_eq!(count_of(&project, Isa::BuildFile), 3);
}

#[test]
fn test_attach_existing_source_is_noop() {
    let mut project = app_project();
    let target = find_target(&project, "App").unwrap();
    let snapshot = project.clone();

    ProjectFileReconciler::new(&mut project)
        .attach_to_target(&target, &id(fixtures::APP_MAIN_FILE), FileRole::CompileSource)
        .unwrap();

    assert_eq!(project, snapshot);
}

#[test]
fn test_attach_moves_file_between_roles() {
    let mut project = app_project();
    let target = find_target(&project, "App").unwrap();
    let file = id(fixtures::APP_MAIN_FILE);
    let sources = id(fixtures::APP_SOURCES_PHASE);
    let resources = id(fixtures::APP_RESOURCES_PHASE);

    ProjectFileReconciler::new(&mut project)
        .attach_to_target(&target, &file, FileRole::Resource)
        .unwrap();

    assert_eq!(bindings(&project, &sources, &file), 0);
    assert_eq!(bindings(&project, &resources, &file), 1);
    // The old build file is gone, not just unlisted
    assert_eq!(count_of(&project, Isa::BuildFile), 2);
}

#[test]
fn test_attach_creates_missing_phase() {
    let mut project = app_project();
    let target = find_target(&project, "AppTests").unwrap();
    let file = id(fixtures::APP_MAIN_FILE);

    ProjectFileReconciler::new(&mut project)
        .attach_to_target(&target, &file, FileRole::Resource)
        .unwrap();

    let phases = project.id_list(&target, "buildPhases");
    assert_eq!(phases.len(), 2);
    let created = &phases[1];
    let object = project.object(created).unwrap();
    assert_eq!(object.get_str("isa"), Some("PBXResourcesBuildPhase"));
    assert_eq!(object.get_str("buildActionMask"), Some("2147483647"));
    assert_eq!(object.get_str("runOnlyForDeploymentPostprocessing"), Some("0"));
    assert_eq!(bindings(&project, created, &file), 1);
}

#[test]
fn test_attach_does_not_touch_other_targets() {
    let mut project = app_project();
    let target = find_target(&project, "AppTests").unwrap();
    let file = id(fixtures::APP_MAIN_FILE);

    ProjectFileReconciler::new(&mut project)
        .attach_to_target(&target, &file, FileRole::CompileSource)
        .unwrap();

    assert_eq!(bindings(&project, &id(fixtures::APP_SOURCES_PHASE), &file), 1);
    assert_eq!(bindings(&project, &id(fixtures::TESTS_SOURCES_PHASE), &file), 1);
}

#[test]
fn test_attach_requires_target_and_file() {
    let mut project = app_project();
    let target = find_target(&project, "App").unwrap();
    let mut reconciler = ProjectFileReconciler::new(&mut project);

    let not_target = reconciler
        .attach_to_target(
            &id(fixtures::APP_SOURCE_GROUP),
            &id(fixtures::APP_MAIN_FILE),
            FileRole::Resource,
        )
        .unwrap_err();
    assert!(matches!(not_target, Error::UnexpectedKind { .. }));

    let missing_file = reconciler
        .attach_to_target(&target, &id("FFFFFFFFFFFFFFFFFFFFFFFF"), FileRole::Resource)
        .unwrap_err();
    assert!(matches!(missing_file, Error::ObjectNotFound { .. }));
}

// =====================================================================
// detach_from_group
// =====================================================================

#[test]
fn test_detach_removes_file_and_build_files() {
    let mut project = app_project();
    let group = id(fixtures::APP_SOURCE_GROUP);
    let file = id(fixtures::APP_MAIN_FILE);

    let removed = ProjectFileReconciler::new(&mut project)
        .detach_from_group(&group, "main.m")
        .unwrap();

    assert!(removed);
    assert!(!project.contains(&file));
    assert!(project.referrers(&file).is_empty());
    assert!(!project.children(&group).contains(&file));
    assert_eq!(project.id_list(&id(fixtures::APP_SOURCES_PHASE), "files").len(), 1);
    assert_eq!(count_of(&project, Isa::BuildFile), 1);
}

#[test]
fn test_detach_leaves_no_dangling_build_files() {
    let mut project = app_project();
    let group = id(fixtures::APP_SOURCE_GROUP);
    let file = id(fixtures::APP_MAIN_FILE);

    let mut reconciler = ProjectFileReconciler::new(&mut project);
    for name in ["App", "AppTests"] {
        let target = find_target(reconciler.project(), name).unwrap();
        reconciler.attach_to_target(&target, &file, FileRole::CompileSource).unwrap();
    }
    assert!(reconciler.detach_from_group(&group, "main.m").unwrap());

    for build_file in project.objects_where(|isa| *isa == Isa::BuildFile) {
        let target = project.object(&build_file).and_then(|o| o.get_str("fileRef")).unwrap();
        assert!(project.contains(&id(target)), "{build_file} points at a removed file");
    }
    assert!(project.id_list(&id(fixtures::TESTS_SOURCES_PHASE), "files").is_empty());
}

#[test]
fn test_detach_missing_file_changes_nothing() {
    let mut project = app_project();
    let snapshot = project.clone();

    let removed = ProjectFileReconciler::new(&mut project)
        .detach_from_group(&id(fixtures::APP_SOURCE_GROUP), "Nope.m")
        .unwrap();

    assert!(!removed);
    assert_eq!(project, snapshot);
}

#[test]
fn test_detach_removes_only_first_match() {
    let mut project = app_project();
    let group = id(fixtures::APP_SOURCE_GROUP);
    let delegate = id(fixtures::APP_DELEGATE_FILE);
    let main = id(fixtures::APP_MAIN_FILE);
    let sources = id(fixtures::APP_SOURCES_PHASE);

    // Both files live under App/, so the fragment matches each of them
    let removed = ProjectFileReconciler::new(&mut project)
        .detach_from_group(&group, "App")
        .unwrap();

    assert!(removed);
    assert!(!project.contains(&delegate));
    assert_eq!(bindings(&project, &sources, &delegate), 0);
    assert_eq!(project.children(&group), vec![main.clone()]);
    assert_eq!(bindings(&project, &sources, &main), 1);
    assert_eq!(count_of(&project, Isa::BuildFile), 1);
}

#[test]
fn test_detach_twice_reports_second_as_noop() {
    let mut project = app_project();
    let group = id(fixtures::APP_SOURCE_GROUP);

    let mut reconciler = ProjectFileReconciler::new(&mut project);
    assert!(reconciler.detach_from_group(&group, "AppDelegate").unwrap());
    assert!(!reconciler.detach_from_group(&group, "AppDelegate").unwrap());
}

// =====================================================================
// target_exists
// =====================================================================

#[rstest]
#[case("App", true)]
#[case("AppTests", true)]
#[case("app", false)]
#[case("App ", false)]
#[case("Missing", false)]
fn test_target_exists(#[case] name: &str, #[case] expected: bool) {
    let project = app_project();
    assert_eq!(target_exists(Some(&project), name), expected);
}

#[test]
fn test_target_exists_without_targets_or_project() {
    let project = empty_project();
    assert!(!target_exists(Some(&project), "App"));
    assert!(!target_exists(None, "App"));
}

// =====================================================================
// End to end
// =====================================================================

#[test]
fn test_add_license_to_resources_of_new_target() {
    let mut project = empty_project();
    let target = project.add_native_target("App").unwrap();
    let main = project.main_group().unwrap();
    let config = ReconcileConfig::default();

    let group_path = ["Resources"];
    let role = config.role_for(&NormalizedPath::new("License.txt"), &group_path);
    assert_eq!(role, FileRole::Resource);

    let mut reconciler = ProjectFileReconciler::new(&mut project);
    let group = reconciler.ensure_group(&main, &group_path).unwrap();
    let file = reconciler
        .ensure_file_reference(&group, "License.txt", config.match_mode)
        .unwrap();
    let build_file = reconciler.attach_to_target(&target, &file, role).unwrap();

    let phases = project.id_list(&target, "buildPhases");
    assert_eq!(phases.len(), 1);
    assert_eq!(project.isa(&phases[0]), Some(Isa::ResourcesBuildPhase));
    assert_eq!(project.id_list(&phases[0], "files"), vec![build_file]);
    assert_eq!(project.children(&group), vec![file]);

    let text = project.to_pbxproj();
    assert!(text.contains("/* License.txt in Resources */"));
    assert!(text.contains("/* Begin PBXResourcesBuildPhase section */"));
}
