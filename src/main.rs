//! libman2npm - Convert LibMan manifests to npm package.json
//!
//! Single-file mode converts one libman.json into a package.json plus a
//! resolved package-lock.json; batch mode walks a directory tree and
//! converts every libman.json it finds.

use clap::Parser;
use libman2npm::cli::CliArgs;
use libman2npm::converter::Converter;
use libman2npm::manifest::DEFAULT_PROJECT_NAME;
use libman2npm::output::{write_batch, write_conversion, ReportFormat};
use libman2npm::progress::Progress;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("libman2npm v{}", env!("CARGO_PKG_VERSION"));
        if args.batch {
            eprintln!("Root: {}", args.batch_root().display());
        } else {
            eprintln!("Manifest: {}", args.manifest_path().display());
            eprintln!("Output: {}", args.resolved_output_dir().display());
        }
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let converter = Converter::new(args.dry_run);
    let mut progress = Progress::new(args.show_progress());
    let format = ReportFormat::from_cli(args.json);
    let mut stdout = io::stdout().lock();

    let exit_code = if args.batch {
        let batch = converter.convert_all(&args.batch_root(), &mut progress)?;

        write_batch(&batch, format, &mut stdout)?;

        if args.verbose {
            for failure in &batch.failures {
                eprintln!("  - {}: {}", failure.path.display(), failure.message);
            }
        }

        if batch.has_failures() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    } else {
        let summary = converter.convert(
            &args.manifest_path(),
            &args.resolved_output_dir(),
            DEFAULT_PROJECT_NAME,
            &mut progress,
        );
        progress.finish_and_clear();

        let summary = summary?;
        write_conversion(&summary, format, &mut stdout)?;
        ExitCode::SUCCESS
    };

    stdout.flush()?;
    Ok(exit_code)
}
