//! Project model and file reconciliation for Xcode projects
//!
//! Opens `project.pbxproj` files into a [`Session`], exposes the object
//! graph through [`Project`], and applies idempotent group, file and target
//! mutations through [`ProjectFileReconciler`].

pub mod annotate;
pub mod config;
pub mod error;
pub mod file_type;
pub mod id;
pub mod isa;
pub mod project;
pub mod reconcile;
pub mod session;

pub use config::ReconcileConfig;
pub use error::{Error, Result};
pub use id::ObjectId;
pub use isa::Isa;
pub use project::Project;
pub use reconcile::{
    FileRole, MatchMode, ProjectFileReconciler, find_target, find_targets, target_exists,
};
pub use session::Session;
