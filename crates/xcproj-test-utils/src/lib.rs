//! Shared test utilities for the xcproj workspace.
//!
//! Dev-dependency only, never published. Fixtures are plain project file
//! text so every crate can use them without depending on the model.
//!
//! # Modules
//!
//! - [`fixtures`]: project files in Xcode's exact layout
//! - [`project`]: [`TestProject`] builder for on-disk `.xcodeproj` bundles
//!
//! [`TestProject`]: project::TestProject

pub mod fixtures;
pub mod project;
