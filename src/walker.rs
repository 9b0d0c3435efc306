//! Recursive discovery of libman.json manifests
//!
//! The walk is depth-first over an explicit directory stack, so nesting
//! depth is not limited by recursion. Order follows filesystem enumeration
//! and is deliberately unsorted. Unreadable directories are skipped rather
//! than aborting the walk.

use crate::manifest::LIBMAN_FILENAME;
use std::path::{Path, PathBuf};

/// Lazy iterator over every libman.json under a root directory
#[derive(Debug)]
pub struct ManifestWalker {
    /// Directories still to be enumerated
    dirs: Vec<PathBuf>,
    /// Matches found in the directory currently being drained
    found: Vec<PathBuf>,
}

impl ManifestWalker {
    /// Create a walker rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            dirs: vec![root.into()],
            found: Vec::new(),
        }
    }

    fn enumerate(&mut self, dir: &Path) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                self.dirs.push(path);
            } else if entry.file_name() == LIBMAN_FILENAME {
                self.found.push(path);
            }
        }
    }
}

impl Iterator for ManifestWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            if let Some(path) = self.found.pop() {
                return Some(path);
            }
            let dir = self.dirs.pop()?;
            self.enumerate(&dir);
        }
    }
}

/// Find every libman.json under the root
pub fn find_manifests(root: &Path) -> ManifestWalker {
    ManifestWalker::new(root)
}
