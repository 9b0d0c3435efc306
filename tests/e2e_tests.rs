//! End-to-end tests for the libman2npm CLI
//!
//! These tests run the compiled binary with a stub `npm` script prepended to
//! PATH, so the full pipeline executes without touching the network. The
//! stub accepts a fixed set of name@version specs for `view` and writes a
//! minimal package-lock.json for `install --package-lock-only`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Specs the stub npm treats as published
#[cfg(unix)]
const KNOWN_SPECS: &str = "lodash@4.17.21|jquery@3.6.0|@types/node@20.11.5";

/// Create a stub `npm` executable in `<dir>/bin` and return that bin path
#[cfg(unix)]
fn install_stub_npm(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin = dir.join("bin");
    fs::create_dir_all(&bin).unwrap();

    let script = format!(
        r#"#!/bin/sh
case "$1" in
  view)
    case "$2" in
      {specs})
        echo "${{2##*@}}"
        exit 0
        ;;
      *)
        echo "npm error code E404" >&2
        exit 1
        ;;
    esac
    ;;
  install)
    printf '{{"lockfileVersion": 3}}\n' > package-lock.json
    exit 0
    ;;
esac
exit 1
"#,
        specs = KNOWN_SPECS
    );

    let npm = bin.join("npm");
    fs::write(&npm, script).unwrap();
    fs::set_permissions(&npm, fs::Permissions::from_mode(0o755)).unwrap();
    bin
}

/// Command for the binary with the stub npm first on PATH
#[cfg(unix)]
fn cli_with_stub_npm(stub_bin: &Path) -> Command {
    let mut cmd = Command::cargo_bin("libman2npm").unwrap();
    let path = format!(
        "{}:{}",
        stub_bin.display(),
        std::env::var("PATH").unwrap_or_default()
    );
    cmd.env("PATH", path);
    cmd
}

fn cli() -> Command {
    Command::cargo_bin("libman2npm").unwrap()
}

fn write_libman(dir: &Path, content: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join("libman.json");
    fs::write(&path, content).unwrap();
    path
}

mod error_paths {
    use super::*;

    #[test]
    fn test_missing_manifest_exits_one() {
        let dir = TempDir::new().unwrap();

        cli()
            .arg(dir.path().join("libman.json"))
            .arg(dir.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("manifest file not found"));
    }

    #[test]
    fn test_invalid_json_exits_one() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("libman.json");
        fs::write(&manifest, "{ not json").unwrap();

        cli()
            .arg(&manifest)
            .arg(dir.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("failed to parse JSON"));
    }

    #[test]
    fn test_batch_missing_root_exits_one() {
        let dir = TempDir::new().unwrap();

        cli()
            .arg("--batch")
            .arg(dir.path().join("nope"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("directory not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_all_rejected_exits_one_without_writing() {
        let dir = TempDir::new().unwrap();
        let stub = install_stub_npm(dir.path());
        let manifest = write_libman(
            &dir.path().join("app"),
            r#"{"libraries": ["unknown-pkg@9.9.9"]}"#,
        );

        cli_with_stub_npm(&stub)
            .arg(&manifest)
            .arg(dir.path().join("app"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("no valid packages"));

        assert!(!dir.path().join("app/package.json").exists());
    }
}

#[cfg(unix)]
mod single_file {
    use super::*;

    #[test]
    fn test_converts_manifest_and_generates_lockfile() {
        let dir = TempDir::new().unwrap();
        let stub = install_stub_npm(dir.path());
        let app = dir.path().join("app");
        let manifest = write_libman(
            &app,
            r#"{"libraries": ["lodash@4.17.21", "unknown-pkg@9.9.9"]}"#,
        );

        cli_with_stub_npm(&stub)
            .arg(&manifest)
            .arg(&app)
            .assert()
            .success()
            .stdout(predicate::str::contains("Created package.json"))
            .stdout(predicate::str::contains("Created package-lock.json"))
            .stdout(predicate::str::contains("skipped unknown-pkg@9.9.9"));

        let pkg: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(app.join("package.json")).unwrap()).unwrap();
        assert_eq!(pkg["name"], "libman");
        assert_eq!(pkg["version"], "1.0.0");
        assert_eq!(pkg["dependencies"]["lodash"], "4.17.21");
        assert!(pkg["dependencies"].get("unknown-pkg").is_none());

        assert!(app.join("package-lock.json").exists());
    }

    #[test]
    fn test_json_report_on_stdout() {
        let dir = TempDir::new().unwrap();
        let stub = install_stub_npm(dir.path());
        let app = dir.path().join("app");
        let manifest = write_libman(&app, r#"{"libraries": ["jquery@3.6.0"]}"#);

        let output = cli_with_stub_npm(&stub)
            .arg(&manifest)
            .arg(&app)
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(report["project_name"], "libman");
        assert_eq!(report["dependencies"]["jquery"], "3.6.0");
        assert_eq!(report["lockfile_written"], true);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let stub = install_stub_npm(dir.path());
        let app = dir.path().join("app");
        let manifest = write_libman(&app, r#"{"libraries": ["lodash@4.17.21"]}"#);

        cli_with_stub_npm(&stub)
            .arg(&manifest)
            .arg(&app)
            .arg("--dry-run")
            .assert()
            .success()
            .stdout(predicate::str::contains("Dry run"));

        assert!(!app.join("package.json").exists());
        assert!(!app.join("package-lock.json").exists());
    }
}

mod batch_mode {
    use super::*;

    #[test]
    fn test_empty_walk_warns_and_exits_zero() {
        let root = TempDir::new().unwrap();

        cli()
            .arg("--batch")
            .arg(root.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("no libman.json files found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_converts_all_and_reports() {
        let root = TempDir::new().unwrap();
        let stub = install_stub_npm(root.path());
        write_libman(
            &root.path().join("web"),
            r#"{"libraries": ["jquery@3.6.0"]}"#,
        );
        write_libman(
            &root.path().join("nested/tools"),
            r#"{"libraries": ["lodash@4.17.21"]}"#,
        );

        cli_with_stub_npm(&stub)
            .arg("--batch")
            .arg(root.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("2 converted, 0 failed"));

        assert!(root.path().join("web/package.json").exists());
        assert!(root.path().join("web/package-lock.json").exists());
        assert!(root.path().join("nested/tools/package.json").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_with_failures_exits_one_but_finishes() {
        let root = TempDir::new().unwrap();
        let stub = install_stub_npm(root.path());
        write_libman(
            &root.path().join("good"),
            r#"{"libraries": ["jquery@3.6.0"]}"#,
        );
        write_libman(
            &root.path().join("bad"),
            r#"{"libraries": ["unknown-pkg@9.9.9"]}"#,
        );

        cli_with_stub_npm(&stub)
            .arg("--batch")
            .arg(root.path())
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("1 converted, 1 failed"))
            .stdout(predicate::str::contains("no valid packages"));

        // The good manifest was still converted
        assert!(root.path().join("good/package.json").exists());
        assert!(!root.path().join("bad/package.json").exists());
    }
}

mod cli_surface {
    use super::*;

    #[test]
    fn test_help() {
        cli()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Convert LibMan manifests"))
            .stdout(predicate::str::contains("--batch"));
    }

    #[test]
    fn test_version() {
        cli()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_batch_conflicts_with_output_dir() {
        let root = TempDir::new().unwrap();

        cli()
            .arg("--batch")
            .arg(root.path())
            .arg("outdir")
            .assert()
            .failure();
    }
}
