//! Runtime requirement reports.
//!
//! A [`RequirementReport`] is the outcome of checking the host tool and
//! platform versions against their constraints. A mismatch is a normal
//! result, not an error.

use serde::Serialize;

use crate::version::{Version, VersionConstraint};

/// Label of the host build tool in diagnostics.
pub const HOST_COMPONENT: &str = "Maven";

/// Label of the platform runtime in diagnostics.
pub const PLATFORM_COMPONENT: &str = "Java";

/// The result of checking one component against its constraint.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentCheck {
    /// Component label, e.g. "Maven"
    pub component: String,
    /// Version that was found
    pub version: Version,
    /// Constraint the version was checked against
    pub constraint: VersionConstraint,
    /// Whether the version satisfies the constraint
    pub satisfied: bool,
}

impl ComponentCheck {
    /// Check `version` against `constraint`.
    pub fn evaluate(
        component: impl Into<String>,
        version: Version,
        constraint: VersionConstraint,
    ) -> Self {
        let satisfied = constraint.contains(&version);
        Self {
            component: component.into(),
            version,
            constraint,
            satisfied,
        }
    }

    fn diagnostic(&self) -> String {
        format!(
            "* Unsupported {} version {}; supported versions are {}",
            self.component, self.version, self.constraint
        )
    }
}

/// Outcome of a runtime requirement check.
#[derive(Debug, Clone, Serialize)]
pub struct RequirementReport {
    /// Name of the component whose requirements were checked
    pub name: String,
    /// Host build tool check
    pub host: ComponentCheck,
    /// Platform runtime check
    pub platform: ComponentCheck,
    /// Whether both checks passed
    pub satisfied: bool,
}

impl RequirementReport {
    pub fn new(name: impl Into<String>, host: ComponentCheck, platform: ComponentCheck) -> Self {
        let satisfied = host.satisfied && platform.satisfied;
        Self {
            name: name.into(),
            host,
            platform,
            satisfied,
        }
    }

    /// Whether every component satisfies its constraint.
    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    /// Human-readable diagnostic lines; empty when satisfied.
    ///
    /// The first line is a header, then one line per failed component, then
    /// a closing line telling the user to adapt their environment.
    pub fn diagnostics(&self) -> Vec<String> {
        if self.satisfied {
            return Vec::new();
        }

        let mut lines = vec![format!(
            "{} runtime requirements are not fulfilled:",
            self.name
        )];
        lines.extend(
            [&self.host, &self.platform]
                .into_iter()
                .filter(|check| !check.satisfied)
                .map(ComponentCheck::diagnostic),
        );
        lines.push(format!(
            "{} cannot operate in this environment: adapt your environment for requirements",
            self.name
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(component: &str, version: &str, constraint: &str) -> ComponentCheck {
        ComponentCheck::evaluate(
            component,
            Version::parse(version).unwrap(),
            VersionConstraint::parse(constraint).unwrap(),
        )
    }

    #[test]
    fn satisfied_report_has_no_diagnostics() {
        let report = RequirementReport::new(
            "ext",
            check(HOST_COMPONENT, "3.9.10", "[3.9,)"),
            check(PLATFORM_COMPONENT, "21.0.1", "[8,)"),
        );
        assert!(report.is_satisfied());
        assert!(report.diagnostics().is_empty());
    }

    #[test]
    fn diagnostics_list_only_failed_components() {
        let report = RequirementReport::new(
            "ext",
            check(HOST_COMPONENT, "3.8.1", "[3.9,)"),
            check(PLATFORM_COMPONENT, "21.0.1", "[8,)"),
        );
        assert!(!report.is_satisfied());
        assert_eq!(
            report.diagnostics(),
            vec![
                "ext runtime requirements are not fulfilled:".to_string(),
                "* Unsupported Maven version 3.8.1; supported versions are [3.9,)".to_string(),
                "ext cannot operate in this environment: adapt your environment for requirements"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn diagnostics_list_both_failures_in_order() {
        let report = RequirementReport::new(
            "ext",
            check(HOST_COMPONENT, "3.6.3", "[3.9,)"),
            check(PLATFORM_COMPONENT, "1.8.0_392", "[17,)"),
        );
        let lines = report.diagnostics();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Maven version 3.6.3"));
        assert!(lines[2].contains("Java version 1.8.0_392"));
    }

    #[test]
    fn serializes_versions_as_strings() {
        let report = RequirementReport::new(
            "ext",
            check(HOST_COMPONENT, "3.9.10", "[3.9,)"),
            check(PLATFORM_COMPONENT, "21", "[8,)"),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["host"]["version"], "3.9.10");
        assert_eq!(json["host"]["constraint"], "[3.9,)");
        assert_eq!(json["platform"]["satisfied"], true);
        assert_eq!(json["satisfied"], true);
    }
}
