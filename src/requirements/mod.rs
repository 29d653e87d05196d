//! Tool requirement checking and installation.
//!
//! # Modules
//!
//! - [`version`] - Version parsing, extraction and comparison
//! - [`probe`] - Version probe for installed tools
//! - [`registry`] - OS families, package managers and requirement tables
//! - [`installer`] - Best-effort installation of missing tools
//! - [`status`] - Step outcomes and the run summary

pub mod installer;
pub mod probe;
pub mod registry;
pub mod status;
pub mod version;

pub use installer::{default_context, Installer, InstallerContext};
pub use probe::{ProbeOutcome, VersionProbe};
pub use registry::{requirements_for, OsFamily, PackageManager, ToolRequirement};
pub use status::{RunSummary, StepOutcome, StepReport};
pub use version::{extract_version, Version};
