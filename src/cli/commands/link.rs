//! Link command implementation.

use crate::cli::args::LinkArgs;
use crate::fs::{canonical_path, copy_or_link};
use crate::plugin::{Mojo, MojoExecution, MojoResult, Session};

use super::dispatcher::GoalContext;

/// The link command implementation.
pub struct LinkCommand<'a> {
    ctx: GoalContext<'a>,
    args: LinkArgs,
}

impl<'a> LinkCommand<'a> {
    /// Create a new link command.
    pub fn new(ctx: GoalContext<'a>, args: LinkArgs) -> Self {
        Self { ctx, args }
    }
}

impl Mojo for LinkCommand<'_> {
    fn execution(&self) -> &MojoExecution {
        &self.ctx.execution
    }

    fn session(&self) -> &Session {
        self.ctx.session
    }

    fn execute_mojo(&mut self) -> MojoResult<()> {
        let LinkArgs { src, dst, .. } = &self.args;
        copy_or_link(&canonical_path(src), &canonical_path(dst), !self.args.copy_only)?;
        self.ctx
            .ui
            .success(&format!("Created {} from {}", dst.display(), src.display()));
        Ok(())
    }
}
