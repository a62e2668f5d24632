//! Build-start enforcement of declared runtime requirements.
//!
//! A component declares its requirements in a
//! `runtime-requirements.properties` resource:
//!
//! ```text
//! applicationName=My cool new Maven extension
//! mavenRequirement=[3.9,)
//! javaRequirement=[17,)
//! ```
//!
//! [`RuntimeRequirementEnforcer::after_projects_read`] checks them once the
//! projects are read and refuses to continue on mismatch.

use std::path::PathBuf;

use crate::config::{discover_artifact_version, discover_properties};
use crate::error::{Result, SharedError};

use super::checker::check_runtime_requirements;
use super::report::RequirementReport;

/// Resource holding the declared requirements.
pub const RUNTIME_REQUIREMENTS_RESOURCE: &str = "runtime-requirements.properties";
/// Key of the human-readable component name.
pub const APPLICATION_NAME_KEY: &str = "applicationName";
/// Key of the host build tool requirement.
pub const MAVEN_REQUIREMENT_KEY: &str = "mavenRequirement";
/// Key of the platform runtime requirement.
pub const JAVA_REQUIREMENT_KEY: &str = "javaRequirement";
/// Name used when the resource does not declare one.
pub const DEFAULT_APPLICATION_NAME: &str = "Maven extension";

/// Environment variable holding the platform runtime version.
pub const JAVA_VERSION_ENV: &str = "JAVA_VERSION";

const MAVEN_GROUP_ID: &str = "org.apache.maven";
const MAVEN_CORE_ARTIFACT_ID: &str = "maven-core";

/// Host tool and platform versions of the running environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeVersions {
    /// Host build tool version
    pub host: Option<String>,
    /// Platform runtime version
    pub platform: Option<String>,
}

impl RuntimeVersions {
    /// Discover versions from the resource roots and the environment.
    pub fn discover<P: AsRef<std::path::Path>>(roots: &[P]) -> Self {
        let host = discover_artifact_version(roots, MAVEN_GROUP_ID, MAVEN_CORE_ARTIFACT_ID, None);
        let platform = std::env::var(JAVA_VERSION_ENV)
            .ok()
            .and_then(|v| normalize_platform_version(&v));
        Self { host, platform }
    }

    /// Replace the host version if `version` is set.
    pub fn with_host(mut self, version: Option<String>) -> Self {
        if version.is_some() {
            self.host = version;
        }
        self
    }

    /// Replace the platform version if `version` is set.
    pub fn with_platform(mut self, version: Option<String>) -> Self {
        if let Some(version) = version.as_deref().and_then(normalize_platform_version) {
            self.platform = Some(version);
        }
        self
    }
}

/// Reduce a JDK release name to the runtime's `java.version` form.
///
/// Container images publish names such as `jdk-21.0.5+11` or
/// `jdk8u432-b06`; these become `21.0.5` and `1.8.0_432`. Plain versions
/// pass through trimmed. Blank input gives `None`.
pub fn normalize_platform_version(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let release = raw
        .strip_prefix("jdk-")
        .or_else(|| raw.strip_prefix("jdk"))
        .unwrap_or(raw);

    if let Some((major, rest)) = release.split_once('u') {
        let update: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if !major.is_empty() && major.chars().all(|c| c.is_ascii_digit()) && !update.is_empty() {
            return Some(format!("1.{}.0_{}", major, update));
        }
    }

    let version = release.split('+').next().unwrap_or(release).trim();
    (!version.is_empty()).then(|| version.to_string())
}

/// Checks declared runtime requirements at build start.
#[derive(Debug, Clone)]
pub struct RuntimeRequirementEnforcer {
    roots: Vec<PathBuf>,
    versions: RuntimeVersions,
}

impl RuntimeRequirementEnforcer {
    /// Create an enforcer over `roots`, discovering versions from them.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        let versions = RuntimeVersions::discover(&roots);
        Self { roots, versions }
    }

    /// Create an enforcer with explicitly supplied versions.
    pub fn with_versions(roots: Vec<PathBuf>, versions: RuntimeVersions) -> Self {
        Self { roots, versions }
    }

    /// Versions the requirements are checked against.
    pub fn versions(&self) -> &RuntimeVersions {
        &self.versions
    }

    /// Evaluate the declared requirements.
    ///
    /// Returns `Ok(None)` when nothing is declared or the declaration is
    /// incomplete.
    pub fn evaluate(&self) -> Result<Option<RequirementReport>> {
        let Some(props) = discover_properties(&self.roots, RUNTIME_REQUIREMENTS_RESOURCE) else {
            tracing::debug!("No {} found", RUNTIME_REQUIREMENTS_RESOURCE);
            return Ok(None);
        };

        let name = props
            .get(APPLICATION_NAME_KEY)
            .map(String::as_str)
            .unwrap_or(DEFAULT_APPLICATION_NAME);
        let (Some(maven_requirement), Some(java_requirement)) = (
            props.get(MAVEN_REQUIREMENT_KEY),
            props.get(JAVA_REQUIREMENT_KEY),
        ) else {
            tracing::warn!(
                "Incomplete {}: {}={:?}, {}={:?}",
                RUNTIME_REQUIREMENTS_RESOURCE,
                MAVEN_REQUIREMENT_KEY,
                props.get(MAVEN_REQUIREMENT_KEY),
                JAVA_REQUIREMENT_KEY,
                props.get(JAVA_REQUIREMENT_KEY)
            );
            return Ok(None);
        };

        check_runtime_requirements(
            name,
            self.versions.host.as_deref(),
            self.versions.platform.as_deref(),
            maven_requirement,
            java_requirement,
        )
        .map(Some)
    }

    /// Check declared requirements, failing when they are not fulfilled.
    pub fn after_projects_read(&self) -> Result<()> {
        let Some(report) = self.evaluate()? else {
            return Ok(());
        };

        if report.is_satisfied() {
            tracing::debug!("{} runtime requirements are fulfilled", report.name);
            return Ok(());
        }

        let lines = report.diagnostics();
        if let Some((last, rest)) = lines.split_last() {
            for line in rest {
                tracing::warn!("{}", line);
            }
            tracing::error!("{}", last);
        }
        Err(SharedError::RequirementsNotFulfilled { name: report.name })
    }
}
