//! beesetup - development environment bootstrap for the BeeEngine build.
//!
//! Detects the host OS family, makes sure the build tools BeeEngine needs
//! are installed through the platform package manager, initializes Git
//! submodules, and mirrors header files into an include tree.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`headers`] - Header file mirroring
//! - [`requirements`] - Version probing, requirement tables and installation
//! - [`shell`] - External command execution and process environment
//! - [`submodules`] - Git submodule synchronization
//! - [`ui`] - Terminal output and the mockable UI trait
//!
//! # Example
//!
//! ```
//! use beesetup::requirements::{extract_version, Version};
//!
//! let found = extract_version("cmake version 3.28.1").unwrap();
//! assert!(found.satisfies(&Version::new(3, 26)));
//! ```

pub mod cli;
pub mod error;
pub mod headers;
pub mod requirements;
pub mod shell;
pub mod submodules;
pub mod ui;

pub use error::{Result, SetupError};
