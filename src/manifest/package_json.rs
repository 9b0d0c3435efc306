//! package.json writer
//!
//! Builds the derived npm manifest from accepted dependencies and persists
//! it with 2-space indentation, overwriting any existing file at that path.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Version assigned to every derived package
pub const PACKAGE_VERSION: &str = "1.0.0";

/// The derived npm manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageJson {
    /// Package name, taken from the containing directory or the default
    pub name: String,
    /// Always [`PACKAGE_VERSION`]
    pub version: String,
    /// Accepted dependencies, name → exact version
    pub dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    /// Creates a PackageJson for the given project and dependencies
    pub fn new(name: impl Into<String>, dependencies: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            version: PACKAGE_VERSION.to_string(),
            dependencies,
        }
    }

    /// Serialize with 2-space indentation and a trailing newline
    pub fn to_pretty_json(&self) -> String {
        // BTreeMap and struct-field order make this deterministic; to_string_pretty
        // cannot fail on these types
        let mut json = serde_json::to_string_pretty(self).unwrap_or_default();
        json.push('\n');
        json
    }
}

/// Write package.json into the output directory, overwriting without
/// confirmation
///
/// Returns the path of the written file.
pub fn write_package_json(output_dir: &Path, package: &PackageJson) -> Result<PathBuf, ManifestError> {
    let path = output_dir.join("package.json");
    std::fs::write(&path, package.to_pretty_json())
        .map_err(|e| ManifestError::write_error(&path, e))?;
    Ok(path)
}
