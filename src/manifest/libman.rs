//! libman.json reader
//!
//! The `libraries` array carries either bare `name@version` strings or the
//! full LibMan object form (`{"library": "jquery@3.6.0", "provider": ...}`);
//! both are accepted in one document and only the combined token is used.

use crate::error::ManifestError;
use serde::Deserialize;
use std::path::Path;

/// Parsed libman.json document
///
/// Read-only input; the source file is never mutated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibmanDocument {
    /// Raw library references in manifest order
    #[serde(default)]
    pub libraries: Vec<LibraryRef>,
}

/// One entry of the `libraries` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LibraryRef {
    /// Bare `name@version` token
    Token(String),
    /// LibMan object form; fields other than `library` are ignored
    Detailed { library: String },
}

impl LibraryRef {
    /// The combined `name@version` token for this reference
    pub fn token(&self) -> &str {
        match self {
            LibraryRef::Token(token) => token,
            LibraryRef::Detailed { library } => library,
        }
    }
}

impl LibmanDocument {
    /// Raw library tokens in manifest order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.libraries.iter().map(LibraryRef::token)
    }
}

/// Read and parse a libman.json file
pub fn read_libman(path: &Path) -> Result<LibmanDocument, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ManifestError::read_error(path, e))?;

    serde_json::from_str(&content).map_err(|e| ManifestError::parse_error(path, e.to_string()))
}
