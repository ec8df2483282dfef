use crate::error::{BranchVersionError, Result};
use std::fmt;

/// Semantic version representation with an optional prerelease identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
}

impl Version {
    /// Create a new release version (no prerelease)
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    /// Parse a canonical `major.minor.patch[-prerelease]` string
    ///
    /// Validation is delegated to the `semver` crate, so malformed component
    /// counts, non-numeric components and illegal prerelease characters are
    /// all rejected. Build metadata (`+...`) is not part of the canonical
    /// form and is rejected as well.
    pub fn parse(s: &str) -> Result<Self> {
        let parsed = semver::Version::parse(s).map_err(|e| {
            BranchVersionError::version(format!("Invalid version format '{}': {}", s, e))
        })?;

        if !parsed.build.is_empty() {
            return Err(BranchVersionError::version(format!(
                "Invalid version format '{}': build metadata is not supported",
                s
            )));
        }

        let prerelease = if parsed.pre.is_empty() {
            None
        } else {
            Some(parsed.pre.as_str().to_string())
        };

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease,
        })
    }

    /// Next feature version: minor incremented, patch reset, given prerelease
    pub fn bump_minor_with_prerelease(&self, prerelease: impl Into<String>) -> Self {
        Version {
            major: self.major,
            minor: self.minor + 1,
            patch: 0,
            prerelease: Some(prerelease.into()),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}
