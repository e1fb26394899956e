//! OpenStep ASCII property lists as written by Xcode
//!
//! `project.pbxproj` files use the old NeXTSTEP plist dialect. This crate
//! parses that dialect into [`Value`] trees and writes project roots back in
//! the layout Xcode itself produces, so that a load/save cycle keeps diffs
//! minimal.

pub mod error;
pub mod parser;
pub mod value;
pub mod writer;

pub use error::{Error, Result};
pub use parser::parse;
pub use value::{Dictionary, Value};
pub use writer::{Annotate, NoAnnotations, write_project};
