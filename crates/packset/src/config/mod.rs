// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-package compiler configuration.
//!
//! A [`PackageConfiguration`] pairs pattern sets with the compiler options
//! and data artifacts they activate. Instances are built once, from the
//! validated raw representation in [`raw`] or from already-typed parts,
//! and never mutated; a single instance serves arbitrarily many concurrent
//! `matches` queries for the lifetime of an analysis pass.

mod raw;
mod set;

pub use raw::{ConfigError, RawPackageConfiguration, RawPattern, RawPatternKind, RawPatternSet};
pub use set::ConfigurationSet;

use std::collections::HashSet;
use std::fmt;

use crate::path::PackagePath;
use crate::pattern::{PatternSet, contained_in_any};

/// Opaque reference to a data artifact attached to a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtifactRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ArtifactRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An immutable bundle of pattern sets, compiler options, and data
/// artifacts.
///
/// "Matches nothing" is representable (empty `pattern_sets`) and is the
/// correct reading, not an error: such a configuration simply never
/// contributes to any target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfiguration {
    pattern_sets: Vec<PatternSet>,
    compiler_options: Vec<String>,
    data: Vec<ArtifactRef>,
}

impl PackageConfiguration {
    /// Build a configuration from already-typed parts.
    ///
    /// Data artifacts are deduplicated, keeping first occurrence so
    /// iteration order stays deterministic across runs.
    pub fn new(
        pattern_sets: Vec<PatternSet>,
        compiler_options: Vec<String>,
        mut data: Vec<ArtifactRef>,
    ) -> Self {
        let mut seen = HashSet::new();
        data.retain(|artifact| seen.insert(artifact.clone()));
        Self { pattern_sets, compiler_options, data }
    }

    /// True if `path` is contained in any of this configuration's pattern
    /// sets.
    ///
    /// Pure and total over valid paths: repeated calls with the same path
    /// always agree, and nothing here can fail at query time.
    pub fn matches(&self, path: &PackagePath) -> bool {
        contained_in_any(path, &self.pattern_sets)
    }

    /// Extra compiler options, in authored order.
    pub fn options(&self) -> &[String] {
        &self.compiler_options
    }

    /// Attached data artifacts: set semantics, insertion order preserved.
    pub fn data(&self) -> &[ArtifactRef] {
        &self.data
    }

    pub fn pattern_sets(&self) -> &[PatternSet] {
        &self.pattern_sets
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
