//! Tool versions as reported by `--version` banners.

use crate::error::{Result, SetupError};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// First dotted numeric run in a banner, e.g. `3.28.1` in `cmake version 3.28.1`.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+(?:\.\d+)?)").unwrap());

/// A `major.minor[.patch]` version.
///
/// Ordering is lexicographic over the components. A missing patch sorts
/// before any present patch, so `1.2` is older than `1.2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl Version {
    /// Create a two-component version.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Create a three-component version.
    pub const fn with_patch(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch: Some(patch),
        }
    }

    /// Parse a bare version string such as `3.26` or `2.43.0`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || SetupError::InvalidVersion {
            input: input.to_string(),
        };

        let mut parts = input.trim().split('.');
        let major = parse_component(parts.next()).ok_or_else(invalid)?;
        let minor = parse_component(parts.next()).ok_or_else(invalid)?;
        let patch = match parts.next() {
            Some(p) => Some(parse_component(Some(p)).ok_or_else(invalid)?),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    /// Whether this version meets `minimum`.
    pub fn satisfies(&self, minimum: &Version) -> bool {
        self >= minimum
    }
}

fn parse_component(part: Option<&str>) -> Option<u32> {
    let part = part?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for Version {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Extract the first version from command output.
///
/// Returns `None` when the text has no dotted numeric run.
pub fn extract_version(text: &str) -> Option<Version> {
    let found = VERSION_REGEX.find(text)?;
    Version::parse(found.as_str()).ok()
}
