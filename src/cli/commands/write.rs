//! Write command implementation.
//!
//! The `mvn-shared write` command replaces a file with the content of stdin
//! through a collocated temp file.

use std::io::Read;

use crate::cli::args::WriteArgs;
use crate::fs::{canonical_path, write_file, write_file_with_backup};
use crate::plugin::{Mojo, MojoError, MojoExecution, MojoResult, Session};

use super::dispatcher::GoalContext;

/// The write command implementation.
pub struct WriteCommand<'a> {
    ctx: GoalContext<'a>,
    args: WriteArgs,
    input: Box<dyn Read + 'a>,
}

impl<'a> WriteCommand<'a> {
    /// Create a new write command reading its content from `input`.
    pub fn new(ctx: GoalContext<'a>, args: WriteArgs, input: Box<dyn Read + 'a>) -> Self {
        Self { ctx, args, input }
    }
}

impl Mojo for WriteCommand<'_> {
    fn execution(&self) -> &MojoExecution {
        &self.ctx.execution
    }

    fn session(&self) -> &Session {
        self.ctx.session
    }

    fn execute_mojo(&mut self) -> MojoResult<()> {
        let mut content = Vec::new();
        self.input
            .read_to_end(&mut content)
            .map_err(|e| MojoError::execution("Could not read input", e))?;

        let target = &canonical_path(&self.args.target);
        let writer = |tmp: &std::path::Path| -> crate::Result<()> {
            std::fs::write(tmp, &content)?;
            Ok(())
        };
        if self.args.backup {
            write_file_with_backup(target, writer)?;
        } else {
            write_file(target, writer)?;
        }

        self.ctx.ui.success(&format!(
            "Wrote {} bytes to {}",
            content.len(),
            target.display()
        ));
        Ok(())
    }
}
