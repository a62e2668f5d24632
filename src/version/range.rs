//! Version ranges such as `[1.0,2.0)` or `(3.9,)`.

use std::fmt;

use crate::error::{Result, SharedError};

use super::generic::Version;

/// One end of a [`VersionRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    /// The bounding version.
    pub version: Version,
    /// Whether the bounding version itself is part of the range.
    pub inclusive: bool,
}

/// A contiguous range of versions. A missing bound is unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    lower: Option<Bound>,
    upper: Option<Bound>,
}

impl VersionRange {
    /// Parse a single range: `[a,b]`, `[a,b)`, `(a,b]`, `(a,b)`, with
    /// either side optionally empty, `[a]` for exactly `a`, or `[a.*]` for
    /// every version starting with `a`.
    pub fn parse(range: &str) -> Result<Self> {
        let lower_inclusive = if range.starts_with('[') {
            true
        } else if range.starts_with('(') {
            false
        } else {
            return Err(SharedError::invalid_version(
                range,
                format!("Invalid version range {}, a range must start with either [ or (", range),
            ));
        };

        let upper_inclusive = if range.ends_with(']') {
            true
        } else if range.ends_with(')') {
            false
        } else {
            return Err(SharedError::invalid_version(
                range,
                format!("Invalid version range {}, a range must end with either ] or )", range),
            ));
        };

        if range.len() < 2 {
            return Err(SharedError::invalid_version(
                range,
                format!("Invalid version range {}", range),
            ));
        }
        let body = &range[1..range.len() - 1];

        let Some((lower_text, upper_text)) = body.split_once(',') else {
            if !lower_inclusive || !upper_inclusive {
                return Err(SharedError::invalid_version(
                    range,
                    format!(
                        "Invalid version range {}, single version must be surrounded by []",
                        range
                    ),
                ));
            }
            return Self::parse_single(body.trim());
        };

        let lower_text = lower_text.trim();
        let upper_text = upper_text.trim();
        if upper_text.contains(',') {
            return Err(SharedError::invalid_version(
                range,
                format!(
                    "Invalid version range {}, bounds may not contain additional ','",
                    range
                ),
            ));
        }

        let lower = parse_bound(lower_text, lower_inclusive)?;
        let upper = parse_bound(upper_text, upper_inclusive)?;
        if let (Some(lower), Some(upper)) = (&lower, &upper) {
            if upper.version < lower.version {
                return Err(SharedError::invalid_version(
                    range,
                    format!(
                        "Invalid version range {}, lower bound must not be greater than upper bound",
                        range
                    ),
                ));
            }
        }

        Ok(Self { lower, upper })
    }

    fn parse_single(version: &str) -> Result<Self> {
        let (lower, upper) = match version.strip_suffix(".*") {
            Some(prefix) => {
                // validates the prefix before synthesizing the bounds
                Version::parse(prefix)?;
                (
                    Version::from_trusted(&format!("{}.min", prefix)),
                    Version::from_trusted(&format!("{}.max", prefix)),
                )
            }
            None => {
                let exact = Version::parse(version)?;
                (exact.clone(), exact)
            }
        };
        Ok(Self {
            lower: Some(Bound {
                version: lower,
                inclusive: true,
            }),
            upper: Some(Bound {
                version: upper,
                inclusive: true,
            }),
        })
    }

    /// The lower bound, if any.
    pub fn lower(&self) -> Option<&Bound> {
        self.lower.as_ref()
    }

    /// The upper bound, if any.
    pub fn upper(&self) -> Option<&Bound> {
        self.upper.as_ref()
    }

    /// Whether `version` lies within this range.
    pub fn contains(&self, version: &Version) -> bool {
        if let Some(lower) = &self.lower {
            match lower.version.cmp(version) {
                std::cmp::Ordering::Greater => return false,
                std::cmp::Ordering::Equal if !lower.inclusive => return false,
                _ => {}
            }
        }
        if let Some(upper) = &self.upper {
            match upper.version.cmp(version) {
                std::cmp::Ordering::Less => return false,
                std::cmp::Ordering::Equal if !upper.inclusive => return false,
                _ => {}
            }
        }
        true
    }
}

fn parse_bound(text: &str, inclusive: bool) -> Result<Option<Bound>> {
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(Bound {
        version: Version::parse(text)?,
        inclusive,
    }))
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Some(lower) => write!(
                f,
                "{}{}",
                if lower.inclusive { '[' } else { '(' },
                lower.version
            )?,
            None => f.write_str("(")?,
        }
        f.write_str(",")?;
        match &self.upper {
            Some(upper) => write!(
                f,
                "{}{}",
                upper.version,
                if upper.inclusive { ']' } else { ')' }
            ),
            None => f.write_str(")"),
        }
    }
}
