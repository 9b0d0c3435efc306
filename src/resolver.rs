//! Lockfile generation via the external npm resolver
//!
//! Dependency resolution itself is delegated to `npm install
//! --package-lock-only`, run with the working directory set to the output
//! directory. Entries are pre-validated, so a non-zero exit here is
//! unexpected; the error carries npm's captured output for diagnosis. There
//! is no rollback: package.json stays on disk if this step fails.

use crate::command::{CommandRunner, SystemCommandRunner};
use crate::error::ResolverError;
use std::path::Path;

/// Trait for generating a lockfile beside a written manifest
pub trait LockfileResolver {
    /// Generate package-lock.json in the given directory
    fn generate(&self, dir: &Path) -> Result<(), ResolverError>;
}

/// Lockfile resolver backed by the npm CLI
pub struct NpmLockfileResolver<R: CommandRunner> {
    runner: R,
}

impl NpmLockfileResolver<SystemCommandRunner> {
    /// Create a resolver that runs the real npm CLI
    pub fn new() -> Self {
        Self::with_runner(SystemCommandRunner::new())
    }
}

impl Default for NpmLockfileResolver<SystemCommandRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> NpmLockfileResolver<R> {
    /// Create a resolver over a custom command runner (for testing)
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> LockfileResolver for NpmLockfileResolver<R> {
    fn generate(&self, dir: &Path) -> Result<(), ResolverError> {
        let output = self
            .runner
            .run("npm", &["install", "--package-lock-only"], Some(dir))
            .map_err(|e| ResolverError::spawn(dir, e))?;

        if output.success {
            Ok(())
        } else {
            Err(ResolverError::lockfile_failed(
                dir,
                output.stdout,
                output.stderr,
            ))
        }
    }
}
