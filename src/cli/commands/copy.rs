//! Copy command implementation.

use std::path::Path;

use crate::cli::args::CopyArgs;
use crate::fs::copy_recursively;
use crate::plugin::{Mojo, MojoError, MojoExecution, MojoResult, Session};

use super::dispatcher::GoalContext;

/// The copy command implementation.
pub struct CopyCommand<'a> {
    ctx: GoalContext<'a>,
    args: CopyArgs,
}

impl<'a> CopyCommand<'a> {
    /// Create a new copy command.
    pub fn new(ctx: GoalContext<'a>, args: CopyArgs) -> Self {
        Self { ctx, args }
    }

    fn is_excluded(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.args.exclude.iter().any(|e| e == name))
    }
}

impl Mojo for CopyCommand<'_> {
    fn execution(&self) -> &MojoExecution {
        &self.ctx.execution
    }

    fn session(&self) -> &Session {
        self.ctx.session
    }

    fn execute_mojo(&mut self) -> MojoResult<()> {
        let CopyArgs { from, to, .. } = &self.args;
        if !from.is_dir() {
            return Err(MojoError::failure(format!(
                "{} is not a directory",
                from.display()
            )));
        }

        copy_recursively(from, to, |path| !self.is_excluded(path), self.args.overwrite)?;

        self.ctx
            .ui
            .success(&format!("Copied {} to {}", from.display(), to.display()));
        Ok(())
    }
}
