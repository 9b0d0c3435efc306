//! Report rendering for conversion results
//!
//! Text output is the human-readable summary printed after the per-entry
//! progress lines; JSON output replaces all progress output with a single
//! machine-readable document on stdout.

use crate::domain::{BatchSummary, ConversionSummary};
use colored::Colorize;
use std::io::Write;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON document for machine processing
    Json,
}

impl ReportFormat {
    /// Select the format from CLI flags
    pub fn from_cli(json: bool) -> Self {
        if json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }
}

/// Write the single-file conversion report
pub fn write_conversion(
    summary: &ConversionSummary,
    format: ReportFormat,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, summary)?;
            writeln!(writer)
        }
        ReportFormat::Text => {
            if summary.dry_run {
                writeln!(writer, "{}", "Dry run: no files were written".yellow())?;
            }
            writeln!(
                writer,
                "Converted {} ({} {}, {} skipped)",
                summary.manifest_path.display(),
                summary.accepted_count(),
                if summary.accepted_count() == 1 {
                    "dependency"
                } else {
                    "dependencies"
                },
                summary.skipped_count()
            )?;
            for entry in &summary.skipped {
                writeln!(writer, "  {} {}", "skipped".yellow(), entry)?;
            }
            if summary.manifest_written {
                writeln!(writer, "{}", "Created package.json".green())?;
            }
            if summary.lockfile_written {
                writeln!(writer, "{}", "Created package-lock.json".green())?;
            }
            Ok(())
        }
    }
}

/// Write the batch walk report
pub fn write_batch(
    batch: &BatchSummary,
    format: ReportFormat,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, batch)?;
            writeln!(writer)
        }
        ReportFormat::Text => {
            if batch.files_processed() == 0 {
                writeln!(
                    writer,
                    "{}",
                    "Warning: no libman.json files found".yellow()
                )?;
                return Ok(());
            }

            writeln!(
                writer,
                "Processed {} manifests: {} converted, {} failed",
                batch.files_processed(),
                batch.success_count().to_string().green(),
                if batch.has_failures() {
                    batch.failure_count().to_string().red().to_string()
                } else {
                    batch.failure_count().to_string()
                }
            )?;
            for failure in &batch.failures {
                writeln!(
                    writer,
                    "  {} {}: {}",
                    "failed".red(),
                    failure.path.display(),
                    failure.message
                )?;
            }
            Ok(())
        }
    }
}
