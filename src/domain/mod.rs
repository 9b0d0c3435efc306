//! Core domain models for libman2npm
//!
//! This module contains the fundamental types used throughout the
//! application:
//! - Library entries parsed from `name@version` tokens
//! - Per-manifest conversion results and summaries
//! - Batch walk accounting

mod library;
mod summary;

pub use library::LibraryEntry;
pub use summary::{BatchFailure, BatchSummary, ConversionResult, ConversionSummary};
