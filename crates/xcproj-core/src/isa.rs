//! Object kinds stored in the `isa` key of every project object

use std::fmt;

/// The kind of a project object.
///
/// Kinds the reconciler inspects get their own variant; everything else is
/// carried as [`Isa::Other`] and preserved untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Isa {
    Project,
    Group,
    VariantGroup,
    VersionGroup,
    FileReference,
    BuildFile,
    NativeTarget,
    AggregateTarget,
    LegacyTarget,
    SourcesBuildPhase,
    ResourcesBuildPhase,
    FrameworksBuildPhase,
    HeadersBuildPhase,
    CopyFilesBuildPhase,
    ShellScriptBuildPhase,
    ConfigurationList,
    BuildConfiguration,
    Other(String),
}

impl Isa {
    pub fn as_str(&self) -> &str {
        match self {
            Isa::Project => "PBXProject",
            Isa::Group => "PBXGroup",
            Isa::VariantGroup => "PBXVariantGroup",
            Isa::VersionGroup => "XCVersionGroup",
            Isa::FileReference => "PBXFileReference",
            Isa::BuildFile => "PBXBuildFile",
            Isa::NativeTarget => "PBXNativeTarget",
            Isa::AggregateTarget => "PBXAggregateTarget",
            Isa::LegacyTarget => "PBXLegacyTarget",
            Isa::SourcesBuildPhase => "PBXSourcesBuildPhase",
            Isa::ResourcesBuildPhase => "PBXResourcesBuildPhase",
            Isa::FrameworksBuildPhase => "PBXFrameworksBuildPhase",
            Isa::HeadersBuildPhase => "PBXHeadersBuildPhase",
            Isa::CopyFilesBuildPhase => "PBXCopyFilesBuildPhase",
            Isa::ShellScriptBuildPhase => "PBXShellScriptBuildPhase",
            Isa::ConfigurationList => "XCConfigurationList",
            Isa::BuildConfiguration => "XCBuildConfiguration",
            Isa::Other(name) => name,
        }
    }

    pub fn parse(name: &str) -> Self {
        match name {
            "PBXProject" => Isa::Project,
            "PBXGroup" => Isa::Group,
            "PBXVariantGroup" => Isa::VariantGroup,
            "XCVersionGroup" => Isa::VersionGroup,
            "PBXFileReference" => Isa::FileReference,
            "PBXBuildFile" => Isa::BuildFile,
            "PBXNativeTarget" => Isa::NativeTarget,
            "PBXAggregateTarget" => Isa::AggregateTarget,
            "PBXLegacyTarget" => Isa::LegacyTarget,
            "PBXSourcesBuildPhase" => Isa::SourcesBuildPhase,
            "PBXResourcesBuildPhase" => Isa::ResourcesBuildPhase,
            "PBXFrameworksBuildPhase" => Isa::FrameworksBuildPhase,
            "PBXHeadersBuildPhase" => Isa::HeadersBuildPhase,
            "PBXCopyFilesBuildPhase" => Isa::CopyFilesBuildPhase,
            "PBXShellScriptBuildPhase" => Isa::ShellScriptBuildPhase,
            "XCConfigurationList" => Isa::ConfigurationList,
            "XCBuildConfiguration" => Isa::BuildConfiguration,
            other => Isa::Other(other.to_string()),
        }
    }

    /// Containers that own `children`.
    pub fn is_group(&self) -> bool {
        matches!(self, Isa::Group | Isa::VariantGroup | Isa::VersionGroup)
    }

    pub fn is_target(&self) -> bool {
        matches!(
            self,
            Isa::NativeTarget | Isa::AggregateTarget | Isa::LegacyTarget
        )
    }

    /// Phases that own a `files` list of build files.
    pub fn is_build_phase(&self) -> bool {
        matches!(
            self,
            Isa::SourcesBuildPhase
                | Isa::ResourcesBuildPhase
                | Isa::FrameworksBuildPhase
                | Isa::HeadersBuildPhase
                | Isa::CopyFilesBuildPhase
                | Isa::ShellScriptBuildPhase
        )
    }

    /// Name Xcode shows for a phase that has no explicit `name`.
    pub fn default_phase_name(&self) -> Option<&'static str> {
        match self {
            Isa::SourcesBuildPhase => Some("Sources"),
            Isa::ResourcesBuildPhase => Some("Resources"),
            Isa::FrameworksBuildPhase => Some("Frameworks"),
            Isa::HeadersBuildPhase => Some("Headers"),
            Isa::CopyFilesBuildPhase => Some("CopyFiles"),
            Isa::ShellScriptBuildPhase => Some("ShellScript"),
            _ => None,
        }
    }
}

impl fmt::Display for Isa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
