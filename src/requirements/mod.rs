//! Runtime requirement checking.
//!
//! Verifies that the running host build tool and platform runtime satisfy
//! the version constraints a component declares.
//!
//! # Modules
//!
//! - [`checker`] - Pure check of two versions against two constraints
//! - [`report`] - Check results and diagnostic lines
//! - [`enforcer`] - Build-start enforcement from `runtime-requirements.properties`

pub mod checker;
pub mod enforcer;
pub mod report;

pub use checker::check_runtime_requirements;
pub use enforcer::{
    normalize_platform_version, RuntimeRequirementEnforcer, RuntimeVersions,
    RUNTIME_REQUIREMENTS_RESOURCE,
};
pub use report::{ComponentCheck, RequirementReport};
