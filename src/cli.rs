//! CLI argument parsing module for libman2npm

use clap::Parser;
use std::path::PathBuf;

/// Default manifest path in legacy single-file mode
pub const DEFAULT_MANIFEST_PATH: &str = "/convert/libman.json";

/// Default output directory in legacy single-file mode
pub const DEFAULT_OUTPUT_DIR: &str = "/convert";

/// Convert LibMan manifests to npm package.json with a resolved lockfile
#[derive(Parser, Debug, Clone)]
#[command(
    name = "libman2npm",
    version,
    about = "Convert LibMan manifests to npm package.json"
)]
pub struct CliArgs {
    /// Manifest path (default /convert/libman.json), or root directory with --batch
    pub path: Option<PathBuf>,

    /// Output directory for package.json (default /convert; single-file mode only)
    pub output_dir: Option<PathBuf>,

    /// Recursively convert every libman.json under the given root
    #[arg(long, conflicts_with = "output_dir")]
    pub batch: bool,

    /// Validate against the registry without writing any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output the final report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable quiet mode - suppress per-entry progress lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Manifest path for single-file mode, with the legacy default applied
    pub fn manifest_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH))
    }

    /// Output directory for single-file mode, with the legacy default applied
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Walk root for batch mode, defaulting to the current directory
    pub fn batch_root(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Whether any progress output should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}
