//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading libman.json or writing package.json
//! - ConvertError: Conversions that could not produce a usable manifest
//! - ResolverError: Lockfile generation failures
//! - IoError: File system operation failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Conversion related errors
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Lockfile resolver related errors
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Source manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the source manifest
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source manifest is not valid JSON
    #[error("failed to parse JSON in {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Failed to write the derived manifest
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the conversion pipeline itself
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Every library entry was rejected by the registry
    #[error("no valid packages found in {path}: every library entry was rejected by the registry")]
    NoValidPackages { path: PathBuf },
}

/// Errors from the external lockfile resolver
#[derive(Error, Debug)]
pub enum ResolverError {
    /// npm exited non-zero while generating the lockfile
    #[error("lockfile generation failed in {dir}: npm exited with an error\n{stderr}")]
    LockfileFailed {
        dir: PathBuf,
        stdout: String,
        stderr: String,
    },

    /// The resolver command could not be spawned at all
    #[error("failed to invoke npm in {dir}: {source}")]
    Spawn {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Walk root directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl ConvertError {
    /// Creates a new NoValidPackages error
    pub fn no_valid_packages(path: impl Into<PathBuf>) -> Self {
        ConvertError::NoValidPackages { path: path.into() }
    }
}

impl ResolverError {
    /// Creates a new LockfileFailed error with captured command output
    pub fn lockfile_failed(
        dir: impl Into<PathBuf>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        ResolverError::LockfileFailed {
            dir: dir.into(),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates a new Spawn error
    pub fn spawn(dir: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResolverError::Spawn {
            dir: dir.into(),
            source,
        }
    }
}

impl IoError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::DirectoryNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/convert/libman.json");
        let msg = format!("{}", err);
        assert!(msg.contains("manifest file not found"));
        assert!(msg.contains("libman.json"));
    }

    #[test]
    fn test_manifest_error_parse() {
        let err = ManifestError::parse_error("/convert/libman.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_manifest_error_write() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ManifestError::write_error("/convert/package.json", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write manifest file"));
        assert!(msg.contains("package.json"));
    }

    #[test]
    fn test_convert_error_no_valid_packages() {
        let err = ConvertError::no_valid_packages("/project/libman.json");
        let msg = format!("{}", err);
        assert!(msg.contains("no valid packages"));
        assert!(msg.contains("/project/libman.json"));
    }

    #[test]
    fn test_resolver_error_lockfile_failed() {
        let err = ResolverError::lockfile_failed("/convert", "", "ERESOLVE unable to resolve");
        let msg = format!("{}", err);
        assert!(msg.contains("lockfile generation failed"));
        assert!(msg.contains("ERESOLVE"));
    }

    #[test]
    fn test_resolver_error_spawn() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ResolverError::spawn("/convert", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to invoke npm"));
    }

    #[test]
    fn test_io_error_directory_not_found() {
        let err = IoError::directory_not_found("/missing/root");
        let msg = format!("{}", err);
        assert!(msg.contains("directory not found"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let manifest_err = ManifestError::not_found("/path");
        let app_err: AppError = manifest_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("manifest file not found"));
    }

    #[test]
    fn test_app_error_from_convert_error() {
        let convert_err = ConvertError::no_valid_packages("/path");
        let app_err: AppError = convert_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("no valid packages"));
    }

    #[test]
    fn test_app_error_from_resolver_error() {
        let resolver_err = ResolverError::lockfile_failed("/dir", "out", "err");
        let app_err: AppError = resolver_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("lockfile generation failed"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_err = IoError::directory_not_found("/missing");
        let app_err: AppError = io_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("directory not found"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
