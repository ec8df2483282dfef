//! Project metadata store backed by `package.json`
//!
//! Reads the project name and version and writes an updated version back by
//! merging into the existing document. serde_json's `preserve_order` feature
//! keeps the remaining keys in their original order.

use crate::domain::Version;
use crate::error::{BranchVersionError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const PACKAGE_FILE: &str = "package.json";

/// Handle on a project's `package.json`
pub struct PackageInfo {
    path: PathBuf,
    content: Value,
}

impl PackageInfo {
    /// Open `package.json` in the given work directory
    pub fn open<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let path = work_dir.as_ref().join(PACKAGE_FILE);
        let raw = fs::read_to_string(&path)?;

        let content: Value = serde_json::from_str(&raw).map_err(|e| {
            BranchVersionError::package(format!("Cannot parse {}: {}", path.display(), e))
        })?;

        if !content.is_object() {
            return Err(BranchVersionError::package(format!(
                "{} is not a JSON object",
                path.display()
            )));
        }

        Ok(PackageInfo { path, content })
    }

    /// Project name
    pub fn name(&self) -> Result<&str> {
        self.string_field("name")
    }

    /// Raw version string
    pub fn version_string(&self) -> Result<&str> {
        self.string_field("version")
    }

    /// Parsed project version
    pub fn version(&self) -> Result<Version> {
        Version::parse(self.version_string()?)
    }

    /// Replace the version and write the document back
    ///
    /// All other keys are preserved, in their original order.
    pub fn fix_version(&mut self, version: &Version) -> Result<()> {
        // open() guarantees the document is an object
        if let Some(object) = self.content.as_object_mut() {
            object.insert("version".to_string(), Value::String(version.to_string()));
        }

        let rendered = serde_json::to_string_pretty(&self.content).map_err(|e| {
            BranchVersionError::package(format!("Cannot serialize package metadata: {}", e))
        })?;

        fs::write(&self.path, rendered)?;
        Ok(())
    }

    fn string_field(&self, key: &str) -> Result<&str> {
        self.content
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BranchVersionError::package(format!(
                    "Missing or non-string '{}' in {}",
                    key,
                    self.path.display()
                ))
            })
    }
}
