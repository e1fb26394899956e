//! `/* comment */` annotations Xcode writes after object ids

use std::collections::HashMap;

use xcproj_plist::Annotate;

use crate::id::ObjectId;
use crate::isa::Isa;
use crate::project::Project;

/// Precomputed annotation text for every object in a project.
#[derive(Debug, Default)]
pub struct Annotations {
    comments: HashMap<String, String>,
}

impl Annotations {
    pub fn for_project(project: &Project) -> Self {
        let mut comments = HashMap::new();
        let ids: Vec<ObjectId> = project.object_ids().collect();

        // Which phase lists each build file, for "<file> in <phase>"
        let mut phase_of: HashMap<ObjectId, String> = HashMap::new();
        // Which object owns each configuration list
        let mut list_owner: HashMap<ObjectId, String> = HashMap::new();

        for id in &ids {
            let Some(isa) = project.isa(id) else {
                continue;
            };
            if isa.is_build_phase() {
                let name = phase_name(project, id, &isa);
                for file in project.id_list(id, "files") {
                    phase_of.insert(file, name.clone());
                }
            }
            let list = project
                .object(id)
                .and_then(|o| o.get_str("buildConfigurationList"));
            if let Some(list) = list {
                let owner_name = match isa {
                    Isa::Project => project.name().map(str::to_string),
                    _ => project.display_name(id),
                }
                .unwrap_or_default();
                list_owner.insert(
                    ObjectId::from(list),
                    format!("Build configuration list for {} \"{}\"", isa, owner_name),
                );
            }
        }

        for id in &ids {
            let Some(isa) = project.isa(id) else {
                continue;
            };
            let comment = match &isa {
                Isa::Project => Some("Project object".to_string()),
                Isa::BuildFile => {
                    let file = project
                        .object(id)
                        .and_then(|o| o.get_str("fileRef").or_else(|| o.get_str("productRef")))
                        .and_then(|file| project.display_name(&ObjectId::from(file)))
                        .unwrap_or_else(|| "(null)".to_string());
                    Some(match phase_of.get(id) {
                        Some(phase) => format!("{} in {}", file, phase),
                        None => file,
                    })
                }
                Isa::ConfigurationList => list_owner.get(id).cloned(),
                isa if isa.is_build_phase() => Some(phase_name(project, id, isa)),
                Isa::Other(name)
                    if name == "PBXContainerItemProxy" || name == "PBXTargetDependency" =>
                {
                    Some(name.clone())
                }
                _ => project.display_name(id),
            };

            if let Some(comment) = comment {
                comments.insert(id.to_string(), comment);
            }
        }

        Self { comments }
    }
}

impl Annotate for Annotations {
    fn annotation(&self, id: &str) -> Option<String> {
        self.comments.get(id).cloned()
    }
}

fn phase_name(project: &Project, id: &ObjectId, isa: &Isa) -> String {
    project
        .object(id)
        .and_then(|o| o.get_str("name"))
        .or_else(|| isa.default_phase_name())
        .unwrap_or_default()
        .to_string()
}
