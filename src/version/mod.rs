//! Generic version scheme: versions, ranges and constraints.
//!
//! # Modules
//!
//! - [`generic`] - [`Version`] parsing and ordering
//! - [`range`] - [`VersionRange`] with inclusive/exclusive bounds
//! - [`constraint`] - [`VersionConstraint`], a union of ranges or an exact version
//!
//! # Example
//!
//! ```
//! use mvn_shared::version::GenericVersionScheme;
//!
//! let scheme = GenericVersionScheme;
//! let constraint = scheme.parse_version_constraint("[3.9,)").unwrap();
//! let version = scheme.parse_version("3.9.10").unwrap();
//! assert!(constraint.contains(&version));
//! ```

pub mod constraint;
pub mod generic;
pub mod range;

pub use constraint::VersionConstraint;
pub use generic::Version;
pub use range::{Bound, VersionRange};

use crate::error::Result;

/// Entry point for parsing versions in the generic scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericVersionScheme;

impl GenericVersionScheme {
    /// Parse a single version, e.g. `3.9.10` or `1.8.0_392`.
    pub fn parse_version(&self, version: &str) -> Result<Version> {
        Version::parse(version)
    }

    /// Parse a single range, e.g. `[1.0,2.0)`.
    pub fn parse_version_range(&self, range: &str) -> Result<VersionRange> {
        VersionRange::parse(range.trim())
    }

    /// Parse a constraint: one or more ranges, or a bare version.
    pub fn parse_version_constraint(&self, constraint: &str) -> Result<VersionConstraint> {
        VersionConstraint::parse(constraint)
    }
}
