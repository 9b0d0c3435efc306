//! npm registry existence checks
//!
//! Validation shells out to `npm view <name>@<version> version` per entry,
//! one blocking query at a time. A zero exit code plus non-empty output
//! confirms the exact name@version exists. There is no retry: a transient
//! registry failure is indistinguishable from "package not found".

use crate::command::{CommandRunner, SystemCommandRunner};

/// Trait for per-entry registry validation
pub trait RegistryProbe {
    /// Human-readable registry name for progress output
    fn registry_name(&self) -> &'static str;

    /// True if the exact name@version exists in the registry
    fn exists(&self, name: &str, version: &str) -> bool;
}

/// Registry probe backed by the npm CLI
pub struct NpmViewProbe<R: CommandRunner> {
    runner: R,
}

impl NpmViewProbe<SystemCommandRunner> {
    /// Create a probe that runs the real npm CLI
    pub fn new() -> Self {
        Self::with_runner(SystemCommandRunner::new())
    }
}

impl Default for NpmViewProbe<SystemCommandRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> NpmViewProbe<R> {
    /// Create a probe over a custom command runner (for testing)
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> RegistryProbe for NpmViewProbe<R> {
    fn registry_name(&self) -> &'static str {
        "npm"
    }

    fn exists(&self, name: &str, version: &str) -> bool {
        let spec = format!("{}@{}", name, version);
        match self.runner.run("npm", &["view", &spec, "version"], None) {
            Ok(output) => output.success && !output.stdout.trim().is_empty(),
            Err(_) => false,
        }
    }
}
