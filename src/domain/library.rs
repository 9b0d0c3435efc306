//! Library entry model and token parsing
//!
//! A libman library token combines name and version as `name@version`.
//! Scoped npm names start with `@`, so the split uses a lazy match: the
//! separator is the first `@` that leaves at least one character of name
//! before it (`@types/node@20.0.0` → name `@types/node`, version `20.0.0`).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A single library pinned to an exact version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// Package name as published in the registry
    pub name: String,
    /// Exact version string, passed through verbatim
    pub version: String,
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(.+?)@(.+)$").expect("invalid library token pattern"))
}

impl LibraryEntry {
    /// Creates a new LibraryEntry
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parse a combined `name@version` token
    ///
    /// Returns None for tokens without a parseable separator; such entries
    /// are silently dropped from the conversion.
    pub fn parse(token: &str) -> Option<Self> {
        let captures = token_pattern().captures(token)?;
        Some(Self::new(&captures[1], &captures[2]))
    }

    /// The combined `name@version` form
    pub fn spec(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

impl fmt::Display for LibraryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_token() {
        let entry = LibraryEntry::parse("lodash@4.17.21").unwrap();
        assert_eq!(entry.name, "lodash");
        assert_eq!(entry.version, "4.17.21");
    }

    #[test]
    fn test_parse_scoped_package() {
        let entry = LibraryEntry::parse("@types/node@20.11.5").unwrap();
        assert_eq!(entry.name, "@types/node");
        assert_eq!(entry.version, "20.11.5");
    }

    #[test]
    fn test_parse_version_with_prerelease() {
        let entry = LibraryEntry::parse("next@14.0.0-canary.1").unwrap();
        assert_eq!(entry.name, "next");
        assert_eq!(entry.version, "14.0.0-canary.1");
    }

    #[test]
    fn test_parse_lazy_split_keeps_version_intact() {
        // A stray @ in the version belongs to the version, not the name
        let entry = LibraryEntry::parse("pkg@1.0.0@beta").unwrap();
        assert_eq!(entry.name, "pkg");
        assert_eq!(entry.version, "1.0.0@beta");
    }

    #[test]
    fn test_parse_no_separator() {
        assert!(LibraryEntry::parse("lodash").is_none());
    }

    #[test]
    fn test_parse_empty_token() {
        assert!(LibraryEntry::parse("").is_none());
    }

    #[test]
    fn test_parse_missing_version() {
        assert!(LibraryEntry::parse("lodash@").is_none());
    }

    #[test]
    fn test_parse_missing_name() {
        // A scoped name with no second @ has no version part
        assert!(LibraryEntry::parse("@4.17.21").is_none());
    }

    #[test]
    fn test_spec_round_trip() {
        let entry = LibraryEntry::new("@scope/pkg", "1.2.3");
        assert_eq!(entry.spec(), "@scope/pkg@1.2.3");
        assert_eq!(LibraryEntry::parse(&entry.spec()).unwrap(), entry);
    }

    #[test]
    fn test_display() {
        let entry = LibraryEntry::new("lodash", "4.17.21");
        assert_eq!(format!("{}", entry), "lodash@4.17.21");
    }
}
