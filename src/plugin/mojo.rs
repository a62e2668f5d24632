//! Goals with built-in skip support.

use super::session::Session;
use super::MojoResult;

/// Execution metadata of a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MojoExecution {
    /// Goal name, e.g. "check"
    pub goal: String,
    /// The `skip` parameter
    pub skip: bool,
}

impl MojoExecution {
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            skip: false,
        }
    }

    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }
}

/// A goal that can be skipped by parameter or session property.
///
/// Implementors provide [`Mojo::execute_mojo`]; callers run [`Mojo::execute`].
/// By default the goal `check` is skipped by `-Dcheck.skip=true`.
pub trait Mojo {
    fn execution(&self) -> &MojoExecution;

    fn session(&self) -> &Session;

    /// Run the goal unless skipped.
    fn execute(&mut self) -> MojoResult<()> {
        if self.is_skipped() {
            self.skip_mojo()
        } else {
            self.execute_mojo()
        }
    }

    fn is_skipped(&self) -> bool {
        self.execution().skip || self.session().get_bool(false, &self.skip_key_names())
    }

    /// Session keys that skip this goal.
    fn skip_key_names(&self) -> Vec<String> {
        vec![format!("{}{}.skip", self.skip_prefix(), self.execution().goal)]
    }

    /// Prefix of the skip keys; non-empty values should end with a dot.
    fn skip_prefix(&self) -> &str {
        ""
    }

    fn skip_mojo(&mut self) -> MojoResult<()> {
        tracing::info!("Mojo '{}' skipped per user request.", self.execution().goal);
        Ok(())
    }

    /// The goal implementation.
    fn execute_mojo(&mut self) -> MojoResult<()>;
}
