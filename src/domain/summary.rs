//! Conversion result and summary types
//!
//! Provides structures for tracking conversion results at file and batch
//! levels.

use super::LibraryEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Outcome of validating one manifest's entries against the registry
///
/// Built fresh per source manifest and discarded once the derived manifest
/// is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    /// Accepted dependencies, name → exact version
    pub dependencies: BTreeMap<String, String>,
    /// Entries rejected by the registry, in manifest order
    pub skipped: Vec<LibraryEntry>,
}

impl ConversionResult {
    /// Creates an empty ConversionResult
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an accepted entry
    pub fn accept(&mut self, entry: LibraryEntry) {
        self.dependencies.insert(entry.name, entry.version);
    }

    /// Records a rejected entry
    pub fn reject(&mut self, entry: LibraryEntry) {
        self.skipped.push(entry);
    }

    /// True if no entry was accepted
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// Report for a single converted manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// Path to the source libman.json
    pub manifest_path: PathBuf,
    /// Name given to the derived package
    pub project_name: String,
    /// Accepted dependencies written to package.json
    pub dependencies: BTreeMap<String, String>,
    /// Entries rejected by the registry
    pub skipped: Vec<LibraryEntry>,
    /// Whether package.json was written
    pub manifest_written: bool,
    /// Whether the lockfile was generated
    pub lockfile_written: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl ConversionSummary {
    /// Creates a summary for a manifest before any writes have happened
    pub fn new(
        manifest_path: impl Into<PathBuf>,
        project_name: impl Into<String>,
        result: ConversionResult,
        dry_run: bool,
    ) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            project_name: project_name.into(),
            dependencies: result.dependencies,
            skipped: result.skipped,
            manifest_written: false,
            lockfile_written: false,
            dry_run,
        }
    }

    /// Number of accepted dependencies
    pub fn accepted_count(&self) -> usize {
        self.dependencies.len()
    }

    /// Number of rejected entries
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// A per-file failure recorded during a batch walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// Path to the manifest that failed
    pub path: PathBuf,
    /// Error message for the failure
    pub message: String,
}

/// Accumulated results of a directory walk
///
/// Reset per invocation, never persisted. The success/failure tally derives
/// from the recorded results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Summaries for successfully converted manifests
    pub results: Vec<ConversionSummary>,
    /// Per-file failures, including all-entries-rejected manifests
    pub failures: Vec<BatchFailure>,
}

impl BatchSummary {
    /// Creates an empty BatchSummary
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful conversion
    pub fn record_success(&mut self, summary: ConversionSummary) {
        self.results.push(summary);
    }

    /// Records a per-file failure
    pub fn record_failure(&mut self, path: impl Into<PathBuf>, message: impl Into<String>) {
        self.failures.push(BatchFailure {
            path: path.into(),
            message: message.into(),
        });
    }

    /// Number of manifests converted successfully
    pub fn success_count(&self) -> usize {
        self.results.len()
    }

    /// Number of manifests that failed
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Total number of processing attempts
    pub fn files_processed(&self) -> usize {
        self.success_count() + self.failure_count()
    }

    /// True if any manifest failed to convert
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
