//! Runtime requirement checking.

use crate::error::{Result, SharedError};
use crate::version::GenericVersionScheme;

use super::report::{ComponentCheck, RequirementReport, HOST_COMPONENT, PLATFORM_COMPONENT};

/// Check host tool and platform versions against their requirements.
///
/// A missing version is a [`SharedError::VersionUndetermined`], a malformed
/// version or requirement is a [`SharedError::InvalidVersionSpecification`].
/// A mismatch is reported through the returned [`RequirementReport`].
pub fn check_runtime_requirements(
    name: &str,
    host_version: Option<&str>,
    platform_version: Option<&str>,
    host_requirement: &str,
    platform_requirement: &str,
) -> Result<RequirementReport> {
    let host_version = host_version.ok_or_else(|| SharedError::VersionUndetermined {
        component: HOST_COMPONENT.to_string(),
    })?;
    let platform_version = platform_version.ok_or_else(|| SharedError::VersionUndetermined {
        component: PLATFORM_COMPONENT.to_string(),
    })?;

    let scheme = GenericVersionScheme;
    let host = ComponentCheck::evaluate(
        HOST_COMPONENT,
        scheme.parse_version(host_version)?,
        scheme.parse_version_constraint(host_requirement)?,
    );
    let platform = ComponentCheck::evaluate(
        PLATFORM_COMPONENT,
        scheme.parse_version(platform_version)?,
        scheme.parse_version_constraint(platform_requirement)?,
    );

    Ok(RequirementReport::new(name, host, platform))
}
