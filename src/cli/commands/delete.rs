//! Delete command implementation.

use crate::cli::args::DeleteArgs;
use crate::fs::delete_recursively;
use crate::plugin::{Mojo, MojoExecution, MojoResult, Session};

use super::dispatcher::GoalContext;

/// The delete command implementation.
pub struct DeleteCommand<'a> {
    ctx: GoalContext<'a>,
    args: DeleteArgs,
}

impl<'a> DeleteCommand<'a> {
    /// Create a new delete command.
    pub fn new(ctx: GoalContext<'a>, args: DeleteArgs) -> Self {
        Self { ctx, args }
    }
}

impl Mojo for DeleteCommand<'_> {
    fn execution(&self) -> &MojoExecution {
        &self.ctx.execution
    }

    fn session(&self) -> &Session {
        self.ctx.session
    }

    fn execute_mojo(&mut self) -> MojoResult<()> {
        delete_recursively(&self.args.path)?;
        self.ctx
            .ui
            .success(&format!("Deleted {}", self.args.path.display()));
        Ok(())
    }
}
