//! Manifest reading and writing
//!
//! This module provides functionality to:
//! - Read and parse libman.json source manifests
//! - Build and persist the derived package.json

mod libman;
mod package_json;

pub use libman::{read_libman, LibmanDocument, LibraryRef};
pub use package_json::{write_package_json, PackageJson, PACKAGE_VERSION};

/// Exact filename the directory walker matches
pub const LIBMAN_FILENAME: &str = "libman.json";

/// Project name used in legacy single-file mode
pub const DEFAULT_PROJECT_NAME: &str = "libman";
