//! mvn-shared - Shared helpers for Maven plugins and extensions.
//!
//! Provides crash-safe file writes, a generic version scheme with range
//! constraints, runtime requirement checking, and skippable goals.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`component`] - Run-once close guard for resources
//! - [`config`] - `.properties` parsing and resource discovery
//! - [`error`] - Error types and result aliases
//! - [`fs`] - Atomic writes, temp files, copy/link/delete helpers
//! - [`plugin`] - Goals with skip support
//! - [`requirements`] - Maven and Java runtime requirement checks
//! - [`ui`] - Terminal output
//! - [`version`] - Versions, ranges and constraints
//!
//! # Example
//!
//! ```
//! use mvn_shared::requirements::check_runtime_requirements;
//!
//! let report = check_runtime_requirements(
//!     "My extension",
//!     Some("3.9.10"),
//!     Some("21.0.1"),
//!     "[3.9,)",
//!     "[17,)",
//! )
//! .unwrap();
//! assert!(report.is_satisfied());
//! ```

pub mod cli;
pub mod component;
pub mod config;
pub mod error;
pub mod fs;
pub mod plugin;
pub mod requirements;
pub mod ui;
pub mod version;

pub use error::{Result, SharedError};
