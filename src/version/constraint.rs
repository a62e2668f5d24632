//! Version constraints: a union of ranges, or one exact version.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, SharedError};

use super::generic::Version;
use super::range::VersionRange;

/// A parsed, immutable version constraint.
///
/// `[1.0,2.0),[3.0,)` is a union of two ranges; a bare `1.0` only matches
/// versions equal to `1.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    kind: ConstraintKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConstraintKind {
    Ranges(Vec<VersionRange>),
    Exact(Version),
}

impl VersionConstraint {
    /// Parse a constraint expression.
    pub fn parse(constraint: &str) -> Result<Self> {
        let mut process = constraint.trim();
        let mut ranges = Vec::new();

        while process.starts_with('[') || process.starts_with('(') {
            let close = match (process.find(')'), process.find(']')) {
                (Some(paren), Some(bracket)) => paren.min(bracket),
                (Some(paren), None) => paren,
                (None, Some(bracket)) => bracket,
                (None, None) => {
                    return Err(SharedError::invalid_version(
                        constraint,
                        format!("Unbounded version range {}", constraint),
                    ))
                }
            };
            ranges.push(VersionRange::parse(&process[..=close])?);

            process = process[close + 1..].trim_start();
            if let Some(rest) = process.strip_prefix(',') {
                process = rest.trim_start();
            }
        }

        if !process.is_empty() && !ranges.is_empty() {
            return Err(SharedError::invalid_version(
                constraint,
                format!(
                    "Invalid version range {}, expected [ or ( but got {}",
                    constraint, process
                ),
            ));
        }

        let kind = if ranges.is_empty() {
            ConstraintKind::Exact(Version::parse(constraint)?)
        } else {
            ConstraintKind::Ranges(ranges)
        };
        Ok(Self { kind })
    }

    /// Whether `version` satisfies this constraint.
    pub fn contains(&self, version: &Version) -> bool {
        match &self.kind {
            ConstraintKind::Ranges(ranges) => ranges.iter().any(|r| r.contains(version)),
            ConstraintKind::Exact(exact) => exact == version,
        }
    }

    /// The ranges of this constraint; empty for an exact-version constraint.
    pub fn ranges(&self) -> &[VersionRange] {
        match &self.kind {
            ConstraintKind::Ranges(ranges) => ranges,
            ConstraintKind::Exact(_) => &[],
        }
    }

    /// The exact version, if this constraint is not a range.
    pub fn exact_version(&self) -> Option<&Version> {
        match &self.kind {
            ConstraintKind::Exact(version) => Some(version),
            ConstraintKind::Ranges(_) => None,
        }
    }
}

impl FromStr for VersionConstraint {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ConstraintKind::Exact(version) => write!(f, "{}", version),
            ConstraintKind::Ranges(ranges) => {
                for (i, range) in ranges.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", range)?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for VersionConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> VersionConstraint {
        VersionConstraint::parse(s).unwrap()
    }

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn single_range() {
        let constraint = c("[1.0,2.0)");
        assert!(constraint.contains(&v("1.5")));
        assert!(!constraint.contains(&v("2.0")));
        assert_eq!(constraint.ranges().len(), 1);
    }

    #[test]
    fn union_of_ranges() {
        let constraint = c("[1.0,2.0),[3.0,)");
        assert!(constraint.contains(&v("1.2")));
        assert!(!constraint.contains(&v("2.5")));
        assert!(constraint.contains(&v("3.1")));
        assert_eq!(constraint.to_string(), "[1.0,2.0),[3.0,)");
    }

    #[test]
    fn union_with_spaces() {
        let constraint = c("(,1.0] , [1.2,)");
        assert!(constraint.contains(&v("0.5")));
        assert!(!constraint.contains(&v("1.1")));
        assert!(constraint.contains(&v("1.2")));
    }

    #[test]
    fn bare_version_matches_exactly() {
        let constraint = c("1.0");
        assert!(constraint.contains(&v("1.0")));
        assert!(constraint.contains(&v("1")));
        assert!(!constraint.contains(&v("1.0.1")));
        assert_eq!(constraint.exact_version(), Some(&v("1.0")));
        assert!(constraint.ranges().is_empty());
    }

    #[test]
    fn host_tool_greater_than_minor_includes_patches() {
        // 3.9.10 orders after 3.9, so an exclusive lower bound of 3.9 still
        // admits it.
        assert!(c("(3.9,)").contains(&v("3.9.10")));
        assert!(!c("(3.9,)").contains(&v("3.9")));
        assert!(!c("(3.9,)").contains(&v("3.9.0")));
    }

    #[test]
    fn platform_lower_bound() {
        let constraint = c("[8,)");
        assert!(constraint.contains(&v("21.0.1")));
        assert!(!constraint.contains(&v("1.8.0_392")));
        assert!(constraint.contains(&v("8")));
    }

    #[test]
    fn rejects_unbounded_range() {
        let err = VersionConstraint::parse("[1.0,").unwrap_err();
        assert!(err.to_string().contains("Unbounded version range"));
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = VersionConstraint::parse("[1.0,2.0) foo").unwrap_err();
        assert!(err.to_string().contains("expected [ or ( but got foo"));
    }

    #[test]
    fn rejects_empty() {
        assert!(VersionConstraint::parse("").is_err());
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let constraint: VersionConstraint = "[3.9,)".parse().unwrap();
        assert_eq!(constraint.to_string(), "[3.9,)");
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&c("[1.0,2.0)")).unwrap();
        assert_eq!(json, "\"[1.0,2.0)\"");
    }
}
