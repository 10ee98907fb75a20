// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalized package path value type.
//!
//! A package path identifies a source package within a build tree:
//! slash-separated, no leading or trailing slash, no `.`/`..` segments.
//! Validation happens once at parse time; every other operation in the
//! crate takes an already-valid [`PackagePath`] and cannot fail.

use std::fmt;
use std::str::FromStr;

/// Error produced when parsing a package path string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The input was empty. The conceptual repository root is not an
    /// addressable package; "everything" is a pattern, not a path.
    #[error("empty package path")]
    Empty,

    /// A leading, trailing, or doubled slash produced an empty segment.
    #[error("empty segment in package path `{0}`")]
    EmptySegment(String),

    /// A `.` or `..` segment; paths must be pre-normalized.
    #[error("`.` or `..` segment in package path `{0}`")]
    DotSegment(String),
}

/// A normalized, slash-separated hierarchical package identifier.
///
/// Immutable value type. Two paths are equal iff their segment sequences
/// are equal; ordering is lexicographic over segments, which gives
/// deterministic iteration when paths are collected into sorted containers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackagePath {
    segments: Vec<String>,
}

impl PackagePath {
    /// Parse and validate a package path.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            return Err(PathError::Empty);
        }
        let mut segments = Vec::new();
        for segment in input.split('/') {
            match segment {
                "" => return Err(PathError::EmptySegment(input.to_string())),
                "." | ".." => return Err(PathError::DotSegment(input.to_string())),
                _ => segments.push(segment.to_string()),
            }
        }
        Ok(Self { segments })
    }

    /// The path's segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// True if `prefix` is a segment-wise prefix of this path.
    ///
    /// Inclusive: every path starts with itself. `a/bc` does not start
    /// with `a/b`; prefixes are whole segments, not string prefixes.
    pub fn starts_with(&self, prefix: &PackagePath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

impl FromStr for PackagePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PackagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
