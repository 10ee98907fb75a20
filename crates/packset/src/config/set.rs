// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered collection of package configurations, as held by a
//! rule-analysis caller.
//!
//! The caller decides the priority order; this type preserves it and
//! collects the matching configurations' options and data for a target's
//! package path.

use std::collections::HashSet;

use crate::config::{ArtifactRef, PackageConfiguration};
use crate::path::PackagePath;

/// Ordered list of [`PackageConfiguration`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationSet {
    configs: Vec<PackageConfiguration>,
}

impl ConfigurationSet {
    pub fn new(configs: Vec<PackageConfiguration>) -> Self {
        Self { configs }
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageConfiguration> {
        self.configs.iter()
    }

    /// The configurations that apply to `path`, in set order.
    ///
    /// Items borrow from the set, not from the query path.
    pub fn matching<'s>(
        &'s self,
        path: &PackagePath,
    ) -> impl Iterator<Item = &'s PackageConfiguration> {
        self.configs.iter().filter(move |config| config.matches(path))
    }

    /// Compiler options contributed by every matching configuration,
    /// concatenated in set order. Duplicates are kept: repeating a
    /// compiler flag is meaningful and the compiler owns that semantics.
    pub fn options_for(&self, path: &PackagePath) -> Vec<&str> {
        self.matching(path)
            .flat_map(|config| config.options().iter().map(String::as_str))
            .collect()
    }

    /// Data artifacts contributed by every matching configuration,
    /// deduplicated across configurations, first occurrence kept.
    pub fn data_for(&self, path: &PackagePath) -> Vec<&ArtifactRef> {
        let mut seen = HashSet::new();
        self.matching(path)
            .flat_map(|config| config.data())
            .filter(|artifact| seen.insert(*artifact))
            .collect()
    }
}

impl FromIterator<PackageConfiguration> for ConfigurationSet {
    fn from_iter<I: IntoIterator<Item = PackageConfiguration>>(iter: I) -> Self {
        Self { configs: iter.into_iter().collect() }
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
