//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::plugin::Session;
use crate::requirements::enforcer::DEFAULT_APPLICATION_NAME;

/// mvn-shared - Maven plugin and extension helpers.
#[derive(Debug, Parser)]
#[command(name = "mvn-shared")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Define a session property (e.g. -D check.skip=true)
    #[arg(short = 'D', value_name = "KEY=VALUE", global = true)]
    pub define: Vec<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Session built from the `-D` definitions.
    pub fn session(&self) -> Session {
        Session::from_definitions(&self.define)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check Maven and Java versions against runtime requirements
    Check(CheckArgs),

    /// Atomically write stdin to a file
    Write(WriteArgs),

    /// Copy a directory tree
    Copy(CopyArgs),

    /// Delete a file or directory tree
    Delete(DeleteArgs),

    /// Hard-link a file where safe, copy it otherwise
    Link(LinkArgs),
}

impl Commands {
    /// Goal name of the subcommand, used for `<goal>.skip` properties.
    pub fn goal(&self) -> &'static str {
        match self {
            Self::Check(_) => "check",
            Self::Write(_) => "write",
            Self::Copy(_) => "copy",
            Self::Delete(_) => "delete",
            Self::Link(_) => "link",
        }
    }

    /// Whether `--skip` was given.
    pub fn skip(&self) -> bool {
        match self {
            Self::Check(args) => args.skip,
            Self::Write(args) => args.skip,
            Self::Copy(args) => args.skip,
            Self::Delete(args) => args.skip,
            Self::Link(args) => args.skip,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Maven version requirement, e.g. "[3.9,)"
    #[arg(long, requires = "java_requirement")]
    pub maven_requirement: Option<String>,

    /// Java version requirement, e.g. "[17,)"
    #[arg(long, requires = "maven_requirement")]
    pub java_requirement: Option<String>,

    /// Component name used in diagnostics
    #[arg(long, default_value = DEFAULT_APPLICATION_NAME)]
    pub name: String,

    /// Directory to search for resources (repeatable, default: current directory)
    #[arg(long = "resource-root", value_name = "DIR")]
    pub resource_roots: Vec<PathBuf>,

    /// Maven version (overrides discovery)
    #[arg(long, env = "MAVEN_VERSION")]
    pub maven_version: Option<String>,

    /// Java version (overrides discovery)
    #[arg(long, env = "JAVA_VERSION")]
    pub java_version: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip this goal
    #[arg(long)]
    pub skip: bool,
}

/// Arguments for the `write` command.
#[derive(Debug, Clone, clap::Args)]
pub struct WriteArgs {
    /// File to write
    pub target: PathBuf,

    /// Keep the previous content as <target>.bak
    #[arg(long)]
    pub backup: bool,

    /// Skip this goal
    #[arg(long)]
    pub skip: bool,
}

/// Arguments for the `copy` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CopyArgs {
    /// Source directory
    pub from: PathBuf,

    /// Destination directory
    pub to: PathBuf,

    /// Replace existing files
    #[arg(long)]
    pub overwrite: bool,

    /// File or directory name to leave out (repeatable)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Skip this goal
    #[arg(long)]
    pub skip: bool,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteArgs {
    /// File or directory to delete
    pub path: PathBuf,

    /// Skip this goal
    #[arg(long)]
    pub skip: bool,
}

/// Arguments for the `link` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LinkArgs {
    /// Existing file
    pub src: PathBuf,

    /// Path of the new file
    pub dst: PathBuf,

    /// Always copy, never link
    #[arg(long)]
    pub copy_only: bool,

    /// Skip this goal
    #[arg(long)]
    pub skip: bool,
}
