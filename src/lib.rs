//! libman2npm - LibMan to npm manifest converter library
//!
//! This library provides the core functionality for converting LibMan
//! manifests (libman.json) into npm manifests:
//! - Per-entry validation against the npm registry
//! - Derived package.json generation
//! - Lockfile generation via npm in lockfile-only mode
//! - Recursive batch conversion over a directory tree

pub mod cli;
pub mod command;
pub mod converter;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod registry;
pub mod resolver;
pub mod walker;
