//! Properties parsing and resource discovery.
//!
//! This module provides:
//! - [`parse_properties`] for `.properties` text
//! - [`discover_properties`] to locate a properties resource across roots
//! - [`discover_artifact_version`] to read an artifact's `pom.properties`
//!
//! # Example
//!
//! ```
//! use mvn_shared::config::parse_properties;
//!
//! let props = parse_properties("mavenRequirement=[3.9,)\njavaRequirement=[17,)\n");
//! assert_eq!(props["mavenRequirement"], "[3.9,)");
//! ```

pub mod discovery;
pub mod properties;

pub use discovery::{
    default_resource_roots, discover_artifact_version, discover_properties,
    pom_properties_resource,
};
pub use properties::parse_properties;
