//! Conversion pipeline orchestration
//!
//! Workflow per manifest: read libman.json → validate each entry against the
//! registry → write package.json from accepted entries → generate the
//! lockfile. Batch mode drives this once per discovered manifest, isolating
//! per-file errors so one bad manifest does not abort the walk.

use crate::domain::{BatchSummary, ConversionResult, ConversionSummary, LibraryEntry};
use crate::error::{AppError, ConvertError, IoError};
use crate::manifest::{
    read_libman, write_package_json, LibmanDocument, PackageJson, DEFAULT_PROJECT_NAME,
};
use crate::progress::Progress;
use crate::registry::{NpmViewProbe, RegistryProbe};
use crate::resolver::{LockfileResolver, NpmLockfileResolver};
use crate::walker::find_manifests;
use colored::Colorize;
use std::path::Path;

/// Orchestrates the convert pipeline against injected collaborators
pub struct Converter {
    /// Registry existence probe
    probe: Box<dyn RegistryProbe>,
    /// External lockfile resolver
    resolver: Box<dyn LockfileResolver>,
    /// Validate and report without writing anything
    dry_run: bool,
}

impl Converter {
    /// Create a converter backed by the real npm CLI
    pub fn new(dry_run: bool) -> Self {
        Self::with_collaborators(
            Box::new(NpmViewProbe::new()),
            Box::new(NpmLockfileResolver::new()),
            dry_run,
        )
    }

    /// Create a converter with custom collaborators (for testing)
    pub fn with_collaborators(
        probe: Box<dyn RegistryProbe>,
        resolver: Box<dyn LockfileResolver>,
        dry_run: bool,
    ) -> Self {
        Self {
            probe,
            resolver,
            dry_run,
        }
    }

    /// Validate every parseable entry against the registry
    ///
    /// Queries run one at a time, in manifest order. Tokens without a
    /// `name@version` separator are dropped without appearing in either
    /// partition. Each query prints an accept/reject line.
    pub fn validate(&self, document: &LibmanDocument, progress: &Progress) -> ConversionResult {
        let mut result = ConversionResult::new();

        for token in document.tokens() {
            let Some(entry) = LibraryEntry::parse(token) else {
                continue;
            };

            if self.probe.exists(&entry.name, &entry.version) {
                progress.println(&format!("{} {}", "✓".green(), entry));
                result.accept(entry);
            } else {
                progress.println(&format!(
                    "{} {} (not found in {} registry)",
                    "✗".red(),
                    entry,
                    self.probe.registry_name()
                ));
                result.reject(entry);
            }
        }

        result
    }

    /// Convert a single manifest: read, validate, write, lock
    ///
    /// package.json is written if and only if at least one entry was
    /// accepted; an empty accepted set raises NoValidPackages instead of
    /// writing an empty manifest. A lockfile failure after the write leaves
    /// package.json on disk.
    pub fn convert(
        &self,
        manifest_path: &Path,
        output_dir: &Path,
        project_name: &str,
        progress: &mut Progress,
    ) -> Result<ConversionSummary, AppError> {
        let document = read_libman(manifest_path)?;
        let result = self.validate(&document, progress);

        if result.is_empty() {
            return Err(ConvertError::no_valid_packages(manifest_path).into());
        }

        let mut summary =
            ConversionSummary::new(manifest_path, project_name, result, self.dry_run);

        if self.dry_run {
            return Ok(summary);
        }

        let package = PackageJson::new(project_name, summary.dependencies.clone());
        write_package_json(output_dir, &package)?;
        summary.manifest_written = true;

        progress.spinner("Generating package-lock.json...");
        self.resolver.generate(output_dir)?;
        summary.lockfile_written = true;

        Ok(summary)
    }

    /// Convert every libman.json under the root directory
    ///
    /// Per-file errors are recorded and the walk continues; only a missing
    /// root aborts the run. Each manifest converts in place: output lands
    /// beside it, and the package is named after its containing directory.
    pub fn convert_all(
        &self,
        root: &Path,
        progress: &mut Progress,
    ) -> Result<BatchSummary, AppError> {
        if !root.is_dir() {
            return Err(IoError::directory_not_found(root).into());
        }

        let manifests: Vec<_> = find_manifests(root).collect();
        let mut batch = BatchSummary::new();

        progress.start(manifests.len() as u64, "Converting manifests");

        for manifest_path in manifests {
            progress.set_message(&manifest_path.display().to_string());

            let output_dir = manifest_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf();
            let project_name = project_name_for(&output_dir);

            match self.convert(&manifest_path, &output_dir, &project_name, progress) {
                Ok(summary) => {
                    progress.println(&format!(
                        "{} {} ({} dependencies)",
                        "converted".green(),
                        manifest_path.display(),
                        summary.accepted_count()
                    ));
                    batch.record_success(summary);
                }
                Err(e) => {
                    progress.println(&format!(
                        "{} {}: {}",
                        "failed".red(),
                        manifest_path.display(),
                        e
                    ));
                    batch.record_failure(&manifest_path, e.to_string());
                }
            }
            progress.inc();
        }

        progress.finish_and_clear();
        Ok(batch)
    }
}

/// Package name for a manifest's containing directory
fn project_name_for(dir: &Path) -> String {
    dir.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string())
}
