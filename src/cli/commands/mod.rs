//! CLI command implementations.
//!
//! Each command is a [`Mojo`](crate::plugin::Mojo) goal, so `--skip` and
//! `-D <goal>.skip=true` work uniformly.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and turns goal errors into
//! [`CommandResult`] exit codes.

pub mod check;
pub mod copy;
pub mod delete;
pub mod dispatcher;
pub mod link;
pub mod write;

pub use dispatcher::{CommandDispatcher, CommandResult, GoalContext};
