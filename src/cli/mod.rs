//! Command-line interface for mvn-shared.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations, each one a skippable goal

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CopyArgs, DeleteArgs, LinkArgs, WriteArgs};
pub use commands::{CommandDispatcher, CommandResult};
