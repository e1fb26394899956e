//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use xcproj_core::MatchMode;

/// xcproj - Keep Xcode project files in sync with files on disk
#[derive(Parser, Debug)]
#[command(name = "xcproj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Reconciler configuration file (TOML)
    #[arg(long, global = true, env = "XCPROJ_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// How `--match` recognises an existing file reference
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchArg {
    /// Resolved path equals the requested path
    Exact,
    /// Resolved path contains the requested text
    Contains,
}

impl From<MatchArg> for MatchMode {
    fn from(arg: MatchArg) -> Self {
        match arg {
            MatchArg::Exact => MatchMode::ExactResolvedPath,
            MatchArg::Contains => MatchMode::PathContainsName,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy a file into the project directory and add it to a target
    ///
    /// The file is copied to <project dir>/<group>/, referenced from the
    /// group of the same name and attached to the target's sources or
    /// resources phase.
    ///
    /// Examples:
    ///   xcproj add-file App.xcodeproj App ~/certs/server.pem Certificates
    ///   xcproj add-file App.xcodeproj App Source.m Classes --yes
    AddFile {
        /// Path to the .xcodeproj bundle or its project.pbxproj
        project: PathBuf,

        /// Target to attach the file to
        target: String,

        /// File to copy into the project
        file: PathBuf,

        /// Group (and folder) to place the file in
        group: String,

        /// Overwrite an existing copy without asking
        #[arg(short, long)]
        yes: bool,

        /// How an existing reference is recognised
        #[arg(long = "match", value_enum)]
        match_mode: Option<MatchArg>,
    },

    /// Print 1 if the project has the target, 0 otherwise
    CheckTarget {
        /// Path to the .xcodeproj bundle or its project.pbxproj
        project: PathBuf,

        /// Target name to look for
        target: String,
    },

    /// Reference a file already on disk and add it to a target
    ///
    /// Files in the Resources group are copied as resources.
    ///
    /// Examples:
    ///   xcproj add-file-ref App.xcodeproj License.txt App Resources
    ///   xcproj add-file-ref App.xcodeproj Api.swift App Sources Network
    AddFileRef {
        /// Path to the .xcodeproj bundle or its project.pbxproj
        project: PathBuf,

        /// File path, relative to the group or absolute
        file: String,

        /// Target to attach the file to
        target: String,

        /// Top-level group to place the reference in
        group: String,

        /// Subgroup inside the group
        subfolder: Option<String>,

        /// How an existing reference is recognised
        #[arg(long = "match", value_enum)]
        match_mode: Option<MatchArg>,
    },

    /// Remove the first file under a group whose path contains a name
    RemoveFile {
        /// Path to the .xcodeproj bundle or its project.pbxproj
        project: PathBuf,

        /// File name or path fragment to match
        file: String,

        /// Group to search
        group: String,
    },
}
