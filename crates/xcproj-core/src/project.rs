//! In-memory project model over the pbxproj object table
//!
//! A [`Project`] keeps the parsed root dictionary with its `objects` table
//! split out. Objects are addressed by [`ObjectId`] and discriminated by
//! [`Isa`]; keys the model does not understand are kept verbatim so a
//! load/save cycle only changes what a mutation touched.

use std::collections::HashMap;

use xcproj_fs::NormalizedPath;
use xcproj_plist::{Dictionary, Value, write_project};

use crate::annotate::Annotations;
use crate::error::{Error, Result};
use crate::id::ObjectId;
use crate::isa::Isa;

/// Object version written for projects created from scratch.
const DEFAULT_OBJECT_VERSION: &str = "46";

/// A loaded Xcode project.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Root keys other than `objects`
    root: Dictionary,
    objects: Dictionary,
    root_object: ObjectId,
    /// Directory containing the `.xcodeproj` bundle
    source_root: NormalizedPath,
    /// Bundle name without extension, used in annotations
    name: Option<String>,
}

impl Project {
    /// Build a project from a parsed plist root.
    ///
    /// Fails when the root lacks an object table or a `rootObject` pointing
    /// at a `PBXProject` with a main group.
    pub fn from_plist(
        mut root: Dictionary,
        source_root: NormalizedPath,
        name: Option<String>,
    ) -> Result<Self> {
        let objects = match root.remove("objects") {
            Some(Value::Dictionary(objects)) => objects,
            Some(_) => return Err(Error::invalid("`objects` is not a dictionary")),
            None => return Err(Error::invalid("missing `objects` table")),
        };

        let root_object = root
            .get_str("rootObject")
            .map(ObjectId::from)
            .ok_or_else(|| Error::invalid("missing `rootObject`"))?;

        let project = Self {
            root,
            objects,
            root_object,
            source_root,
            name,
        };

        project.expect_kind(&project.root_object, Isa::Project)?;
        let main_group = project.main_group()?;
        if !project.isa(&main_group).is_some_and(|isa| isa.is_group()) {
            return Err(Error::UnexpectedKind {
                id: main_group.to_string(),
                expected: "group".to_string(),
                found: project.isa_name(&main_group),
            });
        }

        tracing::debug!(
            objects = project.objects.len(),
            root = %project.root_object,
            "loaded project model"
        );
        Ok(project)
    }

    /// Create a project holding only a root object and an empty main group.
    pub fn empty(source_root: NormalizedPath, name: Option<String>) -> Self {
        let mut project = Self {
            root: Dictionary::new(),
            objects: Dictionary::new(),
            root_object: ObjectId::new(""),
            source_root,
            name,
        };

        let mut main_group = Dictionary::new();
        main_group.insert("isa", Isa::Group.as_str());
        main_group.insert("children", Value::Array(Vec::new()));
        main_group.insert("sourceTree", "<group>");
        let main_group = project.insert_object(main_group);

        let mut root_object = Dictionary::new();
        root_object.insert("isa", Isa::Project.as_str());
        root_object.insert("attributes", Dictionary::new());
        root_object.insert("compatibilityVersion", "Xcode 3.2");
        root_object.insert("developmentRegion", "en");
        root_object.insert("hasScannedForEncodings", "0");
        root_object.insert("mainGroup", main_group.as_str());
        root_object.insert("projectDirPath", "");
        root_object.insert("projectRoot", "");
        root_object.insert("targets", Value::Array(Vec::new()));
        project.root_object = project.insert_object(root_object);

        project.root.insert("archiveVersion", "1");
        project.root.insert("classes", Dictionary::new());
        project.root.insert("objectVersion", DEFAULT_OBJECT_VERSION);
        project.root.insert("rootObject", project.root_object.as_str());
        project
    }

    /// Reassemble the full plist root.
    pub fn to_plist(&self) -> Dictionary {
        let mut root = self.root.clone();
        root.insert("objects", self.objects.clone());
        root
    }

    /// Serialize in Xcode's layout, with object annotations.
    pub fn to_pbxproj(&self) -> String {
        write_project(&self.to_plist(), &Annotations::for_project(self))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn source_root(&self) -> &NormalizedPath {
        &self.source_root
    }

    /// Directory the main group resolves against.
    ///
    /// The source root, adjusted by the project's `projectDirPath`.
    pub fn project_dir(&self) -> NormalizedPath {
        match self
            .object(&self.root_object)
            .and_then(|o| o.get_str("projectDirPath"))
            .filter(|p| !p.is_empty())
        {
            Some(dir) => self.source_root.join(dir).clean(),
            None => self.source_root.clone(),
        }
    }

    pub fn root_object(&self) -> &ObjectId {
        &self.root_object
    }

    pub fn main_group(&self) -> Result<ObjectId> {
        self.object(&self.root_object)
            .and_then(|o| o.get_str("mainGroup"))
            .map(ObjectId::from)
            .ok_or_else(|| Error::invalid("root object has no `mainGroup`"))
    }

    // ------------------------------------------------------------------
    // Object table
    // ------------------------------------------------------------------

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id.as_str())
    }

    pub fn object(&self, id: &ObjectId) -> Option<&Dictionary> {
        self.objects.get_dict(id.as_str())
    }

    pub fn object_mut(&mut self, id: &ObjectId) -> Option<&mut Dictionary> {
        self.objects.get_dict_mut(id.as_str())
    }

    pub fn isa(&self, id: &ObjectId) -> Option<Isa> {
        self.object(id)
            .and_then(|o| o.get_str("isa"))
            .map(Isa::parse)
    }

    fn isa_name(&self, id: &ObjectId) -> String {
        self.isa(id)
            .map(|isa| isa.to_string())
            .unwrap_or_else(|| "missing object".to_string())
    }

    /// Fail unless `id` exists and has kind `expected`.
    pub fn expect_kind(&self, id: &ObjectId, expected: Isa) -> Result<()> {
        match self.isa(id) {
            Some(isa) if isa == expected => Ok(()),
            Some(isa) => Err(Error::UnexpectedKind {
                id: id.to_string(),
                expected: expected.to_string(),
                found: isa.to_string(),
            }),
            None => Err(Error::ObjectNotFound { id: id.to_string() }),
        }
    }

    pub fn object_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.keys().map(ObjectId::from)
    }

    /// Ids of all objects for which `pred` holds on their kind.
    pub fn objects_where(&self, pred: impl Fn(&Isa) -> bool) -> Vec<ObjectId> {
        self.object_ids()
            .filter(|id| self.isa(id).is_some_and(|isa| pred(&isa)))
            .collect()
    }

    /// Insert an object under a freshly generated unique id.
    pub fn insert_object(&mut self, object: Dictionary) -> ObjectId {
        let id = loop {
            let candidate = ObjectId::generate();
            if !self.contains(&candidate) {
                break candidate;
            }
        };
        tracing::debug!(
            id = %id,
            isa = object.get_str("isa").unwrap_or_default(),
            "created object"
        );
        self.objects.insert(id.as_str(), object);
        id
    }

    pub fn remove_object(&mut self, id: &ObjectId) -> Option<Dictionary> {
        match self.objects.remove(id.as_str()) {
            Some(Value::Dictionary(object)) => {
                tracing::debug!(id = %id, "removed object");
                Some(object)
            }
            _ => None,
        }
    }

    /// Ids stored in the array `key` of object `id`.
    pub fn id_list(&self, id: &ObjectId, key: &str) -> Vec<ObjectId> {
        self.object(id)
            .and_then(|o| o.get_array(key))
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ObjectId::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Append `child` to the array `key` of object `id`, creating the array.
    pub fn push_id(&mut self, id: &ObjectId, key: &str, child: &ObjectId) -> Result<()> {
        let object = self
            .object_mut(id)
            .ok_or_else(|| Error::ObjectNotFound { id: id.to_string() })?;

        if let Some(items) = object.get_array_mut(key) {
            items.push(Value::from(child.as_str()));
        } else {
            object.insert(key, Value::Array(vec![Value::from(child.as_str())]));
        }
        Ok(())
    }

    /// Drop every mention of `id` from other objects.
    ///
    /// Removes `id` from all arrays and removes keys whose value is `id`.
    /// Returns how many mentions were removed. The object itself stays in
    /// the table.
    pub fn purge_references(&mut self, id: &ObjectId) -> usize {
        let mut removed = 0;
        for (key, object) in self.objects.iter_mut() {
            if key == id.as_str() {
                continue;
            }
            if let Some(dict) = object.as_dict_mut() {
                removed += purge_from_dict(dict, id.as_str());
            }
        }
        removed
    }

    /// Objects that mention `id` anywhere in their values.
    pub fn referrers(&self, id: &ObjectId) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|(key, _)| *key != id.as_str())
            .filter(|(_, object)| mentions(object, id.as_str()))
            .map(|(key, _)| ObjectId::from(key))
            .collect()
    }

    // ------------------------------------------------------------------
    // Tree and targets
    // ------------------------------------------------------------------

    pub fn children(&self, group: &ObjectId) -> Vec<ObjectId> {
        self.id_list(group, "children")
    }

    /// The group whose `children` contain `id`.
    pub fn parent_of(&self, id: &ObjectId) -> Option<ObjectId> {
        self.groups()
            .find(|(_, children)| {
                children
                    .iter()
                    .any(|child| child.as_str() == Some(id.as_str()))
            })
            .map(|(group, _)| ObjectId::from(group))
    }

    /// Child to parent links for the whole group tree.
    ///
    /// A child listed by several groups maps to the first one in table order,
    /// as [`Project::parent_of`] does.
    pub fn parent_map(&self) -> HashMap<ObjectId, ObjectId> {
        let mut parents = HashMap::new();
        for (group, children) in self.groups() {
            for child in children.iter().filter_map(Value::as_str) {
                parents
                    .entry(ObjectId::from(child))
                    .or_insert_with(|| ObjectId::from(group));
            }
        }
        parents
    }

    fn groups(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.objects.iter().filter_map(|(id, object)| {
            let object = object.as_dict()?;
            let is_group = object.get_str("isa").map(Isa::parse)?.is_group();
            is_group.then(|| (id, object.get_array("children").unwrap_or_default()))
        })
    }

    /// Targets in project order.
    pub fn targets(&self) -> Vec<ObjectId> {
        self.id_list(&self.root_object, "targets")
    }

    /// Name shown in Xcode's navigator: `name`, else the last `path`
    /// component.
    pub fn display_name(&self, id: &ObjectId) -> Option<String> {
        let object = self.object(id)?;
        if let Some(name) = object.get_str("name") {
            return Some(name.to_string());
        }
        object
            .get_str("path")
            .and_then(|p| NormalizedPath::new(p).file_name().map(str::to_string))
    }

    /// Resolve the on-disk location of a group or file reference.
    ///
    /// `<group>` paths resolve against the parent group, `SOURCE_ROOT`
    /// against the project directory and `<absolute>` as written. Other
    /// source trees are build variables and come back as `$(VAR)/path`.
    pub fn real_path(&self, id: &ObjectId) -> NormalizedPath {
        let parents = self.parent_map();
        let mut components: Vec<&str> = Vec::new();
        let mut current = Some(id.clone());
        let mut steps = 0;

        let base = loop {
            let Some(node) = current.take() else {
                break self.project_dir();
            };
            steps += 1;
            // Cyclic children lists cannot be resolved
            if steps > self.objects.len() + 1 {
                break self.project_dir();
            }
            let Some(object) = self.object(&node) else {
                break self.project_dir();
            };
            if let Some(path) = stored_path(object) {
                components.push(path);
            }
            match self.tree_base(object) {
                Some(base) => break base,
                None => current = parents.get(&node).cloned(),
            }
        };

        components
            .iter()
            .rev()
            .fold(base, |acc, part| acc.join(part))
            .clean()
    }

    /// [`Project::real_path`] for a direct child of a group whose real path
    /// is already known.
    pub fn child_real_path(
        &self,
        group_path: &NormalizedPath,
        child: &ObjectId,
    ) -> NormalizedPath {
        let Some(object) = self.object(child) else {
            return group_path.clone();
        };
        let base = self.tree_base(object).unwrap_or_else(|| group_path.clone());
        match stored_path(object) {
            Some(path) => base.join(path).clean(),
            None => base.clean(),
        }
    }

    /// Where a node's `sourceTree` anchors it; `None` for `<group>`.
    fn tree_base(&self, object: &Dictionary) -> Option<NormalizedPath> {
        match object.get_str("sourceTree").unwrap_or("<group>") {
            "<group>" => None,
            "SOURCE_ROOT" => Some(self.project_dir()),
            "<absolute>" => Some(NormalizedPath::new("/")),
            variable => Some(NormalizedPath::new(format!("$({})", variable))),
        }
    }

    /// Add a native target with no build phases.
    pub fn add_native_target(&mut self, name: &str) -> Result<ObjectId> {
        let mut target = Dictionary::new();
        target.insert("isa", Isa::NativeTarget.as_str());
        target.insert("buildPhases", Value::Array(Vec::new()));
        target.insert("buildRules", Value::Array(Vec::new()));
        target.insert("dependencies", Value::Array(Vec::new()));
        target.insert("name", name);
        target.insert("productName", name);
        let id = self.insert_object(target);

        let root = self.root_object.clone();
        self.push_id(&root, "targets", &id)?;
        Ok(id)
    }
}

fn stored_path(object: &Dictionary) -> Option<&str> {
    object.get_str("path").filter(|p| !p.is_empty())
}

fn purge_from_dict(dict: &mut Dictionary, id: &str) -> usize {
    let before = dict.len();
    dict.retain(|_, value| value.as_str() != Some(id));
    let mut removed = before - dict.len();

    for (_, value) in dict.iter_mut() {
        removed += purge_from_value(value, id);
    }
    removed
}

fn purge_from_value(value: &mut Value, id: &str) -> usize {
    match value {
        Value::Array(items) => {
            let before = items.len();
            items.retain(|item| item.as_str() != Some(id));
            let mut removed = before - items.len();
            for item in items.iter_mut() {
                removed += purge_from_value(item, id);
            }
            removed
        }
        Value::Dictionary(dict) => purge_from_dict(dict, id),
        Value::String(_) | Value::Data(_) => 0,
    }
}

fn mentions(value: &Value, id: &str) -> bool {
    match value {
        Value::String(s) => s == id,
        Value::Array(items) => items.iter().any(|item| mentions(item, id)),
        Value::Dictionary(dict) => dict.iter().any(|(_, v)| mentions(v, id)),
        Value::Data(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xcproj_plist::parse;

    const SOURCE: &str = r#"{
        archiveVersion = 1;
        objectVersion = 46;
        objects = {
            P0 = { isa = PBXProject; mainGroup = G0; targets = ( T0 ); projectDirPath = ""; };
            G0 = { isa = PBXGroup; children = ( G1, F2 ); sourceTree = "<group>"; };
            G1 = { isa = PBXGroup; children = ( F1 ); path = App; sourceTree = "<group>"; };
            F1 = { isa = PBXFileReference; path = main.m; sourceTree = "<group>"; };
            F2 = { isa = PBXFileReference; path = "/etc/cert.pem"; name = Cert; sourceTree = "<absolute>"; };
            F3 = { isa = PBXFileReference; path = Foundation.framework; sourceTree = SDKROOT; };
            T0 = { isa = PBXNativeTarget; name = App; buildPhases = ( ); };
        };
        rootObject = P0;
    }"#;

    fn project() -> Project {
        Project::from_plist(parse(SOURCE).unwrap(), NormalizedPath::new("/work"), None).unwrap()
    }

    #[test]
    fn test_real_path_follows_group_chain() {
        let project = project();
        assert_eq!(project.real_path(&"F1".into()).as_str(), "/work/App/main.m");
        assert_eq!(project.real_path(&"G0".into()).as_str(), "/work");
    }

    #[test]
    fn test_real_path_absolute_and_variable_trees() {
        let project = project();
        assert_eq!(project.real_path(&"F2".into()).as_str(), "/etc/cert.pem");
        assert_eq!(
            project.real_path(&"F3".into()).as_str(),
            "$(SDKROOT)/Foundation.framework"
        );
    }

    #[test]
    fn test_display_name_prefers_name() {
        let project = project();
        assert_eq!(project.display_name(&"F2".into()).as_deref(), Some("Cert"));
        assert_eq!(project.display_name(&"F1".into()).as_deref(), Some("main.m"));
        assert_eq!(project.display_name(&"G0".into()), None);
    }

    #[test]
    fn test_parent_and_referrers() {
        let project = project();
        assert_eq!(project.parent_of(&"F1".into()), Some(ObjectId::from("G1")));
        assert_eq!(project.parent_of(&"G0".into()), None);
        assert_eq!(project.referrers(&"T0".into()), vec![ObjectId::from("P0")]);
    }

    #[test]
    fn test_parent_map_matches_parent_of() {
        let project = project();
        let parents = project.parent_map();

        for id in ["F1", "F2", "G1", "G0", "F3"] {
            let id = ObjectId::from(id);
            assert_eq!(parents.get(&id).cloned(), project.parent_of(&id), "{id}");
        }
    }

    #[test]
    fn test_child_real_path_agrees_with_real_path() {
        let project = project();
        let group = project.real_path(&"G1".into());

        assert_eq!(
            project.child_real_path(&group, &"F1".into()),
            project.real_path(&"F1".into())
        );
        assert_eq!(
            project.child_real_path(&project.real_path(&"G0".into()), &"F2".into()).as_str(),
            "/etc/cert.pem"
        );
    }

    #[test]
    fn test_missing_root_object_is_invalid() {
        let root = parse("{ objects = { }; }").unwrap();
        let err = Project::from_plist(root, NormalizedPath::new("/work"), None).unwrap_err();
        assert!(matches!(err, Error::InvalidProject { .. }));
    }

    #[test]
    fn test_root_object_must_be_project() {
        let root = parse("{ objects = { G0 = { isa = PBXGroup; }; }; rootObject = G0; }").unwrap();
        let err = Project::from_plist(root, NormalizedPath::new("/work"), None).unwrap_err();
        assert!(matches!(err, Error::UnexpectedKind { .. }));
    }

    #[test]
    fn test_empty_project_is_loadable() {
        let project = Project::empty(NormalizedPath::new("/work"), Some("App".to_string()));
        let reparsed = Project::from_plist(
            parse(&project.to_pbxproj()).unwrap(),
            NormalizedPath::new("/work"),
            Some("App".to_string()),
        )
        .unwrap();

        assert_eq!(reparsed.to_pbxproj(), project.to_pbxproj());
        assert!(reparsed.targets().is_empty());
    }

    #[test]
    fn test_purge_references_clears_lists_and_keys() {
        let mut project = project();

        assert_eq!(project.purge_references(&"F1".into()), 1);
        assert!(project.children(&"G1".into()).is_empty());

        assert_eq!(project.purge_references(&"G0".into()), 1);
        assert!(project.main_group().is_err());
        assert!(project.contains(&"G0".into()));
    }
}
