//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`GoalContext`] shared by every command
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io;

use crate::cli::args::Commands;
use crate::plugin::{Mojo, MojoError, MojoExecution, MojoResult, Session};
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::copy::CopyCommand;
use super::delete::DeleteCommand;
use super::link::LinkCommand;
use super::write::WriteCommand;

/// Execution metadata, session and UI of a running command.
pub struct GoalContext<'a> {
    pub execution: MojoExecution,
    pub session: &'a Session,
    pub ui: &'a mut dyn UserInterface,
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Map a goal outcome to a result, reporting errors on `ui`.
    ///
    /// Expected failures exit with 1, unexpected errors with 2.
    pub fn from_goal(outcome: MojoResult<()>, ui: &mut dyn UserInterface) -> Self {
        match outcome {
            Ok(()) => Self::success(),
            Err(MojoError::Failure(message)) => {
                ui.error(&message);
                Self::failure(1)
            }
            Err(err @ MojoError::Execution { .. }) => {
                ui.error(&format!("Error: {}", err));
                Self::failure(2)
            }
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    session: Session,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, command: &Commands, ui: &mut dyn UserInterface) -> CommandResult {
        let execution = MojoExecution::new(command.goal()).with_skip(command.skip());
        tracing::debug!("Dispatching goal '{}'", execution.goal);

        let ctx = GoalContext {
            execution,
            session: &self.session,
            ui: &mut *ui,
        };
        let outcome = match command {
            Commands::Check(args) => CheckCommand::new(ctx, args.clone()).execute(),
            Commands::Write(args) => {
                WriteCommand::new(ctx, args.clone(), Box::new(io::stdin())).execute()
            }
            Commands::Copy(args) => CopyCommand::new(ctx, args.clone()).execute(),
            Commands::Delete(args) => DeleteCommand::new(ctx, args.clone()).execute(),
            Commands::Link(args) => LinkCommand::new(ctx, args.clone()).execute(),
        };

        CommandResult::from_goal(outcome, ui)
    }
}
