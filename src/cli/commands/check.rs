//! Check command implementation.
//!
//! The `mvn-shared check` command verifies Maven and Java versions against
//! explicit requirements or a `runtime-requirements.properties` resource.

use crate::cli::args::CheckArgs;
use crate::config::default_resource_roots;
use crate::error::SharedError;
use crate::plugin::{Mojo, MojoError, MojoExecution, MojoResult, Session};
use crate::requirements::{
    check_runtime_requirements, RequirementReport, RuntimeRequirementEnforcer, RuntimeVersions,
    RUNTIME_REQUIREMENTS_RESOURCE,
};

use super::dispatcher::GoalContext;

/// The check command implementation.
pub struct CheckCommand<'a> {
    ctx: GoalContext<'a>,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(ctx: GoalContext<'a>, args: CheckArgs) -> Self {
        Self { ctx, args }
    }

    fn evaluate(&self) -> MojoResult<Option<RequirementReport>> {
        let roots = if self.args.resource_roots.is_empty() {
            default_resource_roots()
        } else {
            self.args.resource_roots.clone()
        };
        let versions = RuntimeVersions::discover(&roots)
            .with_host(self.args.maven_version.clone())
            .with_platform(self.args.java_version.clone());
        tracing::debug!("Runtime versions: {:?}", versions);

        let report = match (&self.args.maven_requirement, &self.args.java_requirement) {
            (Some(maven), Some(java)) => Some(check_runtime_requirements(
                &self.args.name,
                versions.host.as_deref(),
                versions.platform.as_deref(),
                maven,
                java,
            )?),
            _ => RuntimeRequirementEnforcer::with_versions(roots, versions).evaluate()?,
        };
        Ok(report)
    }
}

impl Mojo for CheckCommand<'_> {
    fn execution(&self) -> &MojoExecution {
        &self.ctx.execution
    }

    fn session(&self) -> &Session {
        self.ctx.session
    }

    fn execute_mojo(&mut self) -> MojoResult<()> {
        let Some(report) = self.evaluate()? else {
            self.ctx.ui.message(&format!(
                "No runtime requirements declared in {}",
                RUNTIME_REQUIREMENTS_RESOURCE
            ));
            return Ok(());
        };

        if self.ctx.ui.output_mode().shows_details() && !self.args.json {
            for check in [&report.host, &report.platform] {
                self.ctx.ui.message(&format!(
                    "{} {} {} {}",
                    check.component,
                    check.version,
                    if check.satisfied { "satisfies" } else { "does not satisfy" },
                    check.constraint
                ));
            }
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| MojoError::execution("Could not render report", e))?;
            self.ctx.ui.data(&json);
        } else if report.is_satisfied() {
            self.ctx.ui.success(&format!(
                "{} runtime requirements are fulfilled (Maven {}, Java {})",
                report.name, report.host.version, report.platform.version
            ));
        } else {
            for line in report.diagnostics() {
                self.ctx.ui.warning(&line);
            }
        }

        if report.is_satisfied() {
            Ok(())
        } else {
            Err(SharedError::RequirementsNotFulfilled { name: report.name }.into())
        }
    }
}
