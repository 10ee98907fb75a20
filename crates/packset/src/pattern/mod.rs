// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Package-specification patterns and the containment matcher.
//!
//! A [`PatternSet`] is an ordered list of include/exclude rules over
//! package paths. Containment is decided by the most specific covering
//! pattern (longest anchor path), with set order breaking ties; a negated
//! winner excludes the path, and a path covered by nothing is excluded.

mod matcher;

use crate::path::PackagePath;

/// What a single pattern covers.
///
/// The anchor path is part of the scope, so a subtree or exact pattern
/// without an anchor (or a wildcard with one) is unrepresentable here;
/// the raw configuration layer rejects such input before it gets this far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternScope {
    /// Exactly one package.
    Exact(PackagePath),
    /// A package and everything nested under it.
    Subtree(PackagePath),
    /// Every package. The least specific scope; any covering exact or
    /// subtree pattern overrides it.
    Everything,
}

/// One include/exclude rule in a pattern set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificationPattern {
    scope: PatternScope,
    negated: bool,
}

impl SpecificationPattern {
    /// A pattern matching exactly `path`.
    pub fn exact(path: PackagePath) -> Self {
        Self { scope: PatternScope::Exact(path), negated: false }
    }

    /// A pattern matching `path` and every package nested under it.
    pub fn subtree(path: PackagePath) -> Self {
        Self { scope: PatternScope::Subtree(path), negated: false }
    }

    /// A pattern matching every package.
    pub fn everything() -> Self {
        Self { scope: PatternScope::Everything, negated: false }
    }

    /// Turn this pattern into an exclusion of the paths it covers.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    pub fn scope(&self) -> &PatternScope {
        &self.scope
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// An ordered sequence of specification patterns evaluated together.
///
/// Produced by the embedding tool's group resolution (already flattened);
/// the order is significant for tie-breaking between equally specific
/// patterns and must be preserved from the authored configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<SpecificationPattern>,
}

impl PatternSet {
    pub fn new(patterns: Vec<SpecificationPattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[SpecificationPattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if `path` is contained in this pattern set.
    ///
    /// The most specific covering pattern decides; see [`crate::pattern`]
    /// module docs for the precedence rules. An empty set contains nothing.
    pub fn contains(&self, path: &PackagePath) -> bool {
        matcher::is_contained(&self.patterns, path)
    }
}

impl FromIterator<SpecificationPattern> for PatternSet {
    fn from_iter<I: IntoIterator<Item = SpecificationPattern>>(iter: I) -> Self {
        Self { patterns: iter.into_iter().collect() }
    }
}

/// True if any set in `sets` contains `path`.
///
/// Sets are independent: an exclusion in one set cannot veto an inclusion
/// in another.
pub fn contained_in_any<'a, I>(path: &PackagePath, sets: I) -> bool
where
    I: IntoIterator<Item = &'a PatternSet>,
{
    sets.into_iter().any(|set| set.contains(path))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
