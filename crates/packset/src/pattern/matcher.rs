// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Containment algorithm for pattern sets.
//!
//! Single scan over the set, tracking the winning pattern: the covering
//! pattern with the most anchor segments, earliest entry on ties. The
//! scan allocates nothing; rule analysis runs this for every target
//! against the same configuration, often from many threads at once.

use super::{PatternScope, SpecificationPattern};
use crate::path::PackagePath;

/// True if the scope covers the path at all, ignoring negation.
fn covers(scope: &PatternScope, path: &PackagePath) -> bool {
    match scope {
        PatternScope::Everything => true,
        PatternScope::Exact(anchor) => path == anchor,
        PatternScope::Subtree(anchor) => path.starts_with(anchor),
    }
}

/// Specificity of a scope: the number of anchor segments.
///
/// `Everything` has no anchor and specificity 0; valid anchors have at
/// least one segment, so any covering exact or subtree pattern beats it.
fn specificity(scope: &PatternScope) -> usize {
    match scope {
        PatternScope::Everything => 0,
        PatternScope::Exact(anchor) | PatternScope::Subtree(anchor) => anchor.depth(),
    }
}

/// Decide containment of `path` in an ordered pattern list.
///
/// Strictly more specific patterns replace the running winner; equal
/// specificity keeps the earlier entry. The winner's negation decides the
/// result, and no covering pattern at all means not contained.
pub(super) fn is_contained(patterns: &[SpecificationPattern], path: &PackagePath) -> bool {
    let mut winner: Option<(usize, &SpecificationPattern)> = None;
    for pattern in patterns {
        if !covers(pattern.scope(), path) {
            continue;
        }
        let depth = specificity(pattern.scope());
        match winner {
            Some((best, _)) if depth <= best => {}
            _ => winner = Some((depth, pattern)),
        }
    }
    winner.is_some_and(|(_, pattern)| !pattern.is_negated())
}
