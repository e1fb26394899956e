//! Filesystem helpers for xcproj
//!
//! Provides normalized path handling, project bundle location and safe I/O
//! operations for rewriting project files.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
