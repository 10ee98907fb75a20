// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw (serde-level) configuration representation and its validation.
//!
//! The embedding build tool resolves its authored configuration (named
//! groups, includes, pattern literals) into this flat machine form and
//! hands it over. Conversion into the typed model is eager and fail-fast:
//! a malformed pattern or package path surfaces as a [`ConfigError`] here,
//! at construction, never later inside a match query.

use std::fmt;

use serde::Deserialize;

use crate::config::{ArtifactRef, PackageConfiguration};
use crate::path::{PackagePath, PathError};
use crate::pattern::{PatternSet, SpecificationPattern};

/// Error raised while converting raw configuration into the typed model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An `exact` or `subtree` pattern without an anchor path.
    #[error("`{kind}` pattern requires a package path")]
    MissingPatternPath { kind: RawPatternKind },

    /// An `everything` pattern with an anchor path.
    #[error("`everything` pattern must not carry a package path (got `{path}`)")]
    UnexpectedPatternPath { path: String },

    /// An anchor path that fails package-path validation.
    #[error(transparent)]
    InvalidPath(#[from] PathError),
}

/// Pattern kind in the raw representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawPatternKind {
    Exact,
    Subtree,
    Everything,
}

impl fmt::Display for RawPatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RawPatternKind::Exact => "exact",
            RawPatternKind::Subtree => "subtree",
            RawPatternKind::Everything => "everything",
        })
    }
}

/// One pattern as it arrives from the loader.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPattern {
    pub kind: RawPatternKind,

    /// Anchor path; required for `exact`/`subtree`, forbidden for
    /// `everything`.
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub negated: bool,
}

/// One ordered pattern set as it arrives from the loader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPatternSet {
    #[serde(default)]
    pub patterns: Vec<RawPattern>,
}

/// A whole configuration entry as it arrives from the loader.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPackageConfiguration {
    pub pattern_sets: Vec<RawPatternSet>,
    pub compiler_options: Vec<String>,
    pub data: Vec<String>,
}

impl TryFrom<RawPattern> for SpecificationPattern {
    type Error = ConfigError;

    fn try_from(raw: RawPattern) -> Result<Self, Self::Error> {
        let pattern = match (raw.kind, raw.path) {
            (RawPatternKind::Everything, None) => SpecificationPattern::everything(),
            (RawPatternKind::Everything, Some(path)) => {
                return Err(ConfigError::UnexpectedPatternPath { path });
            }
            (kind, None) => return Err(ConfigError::MissingPatternPath { kind }),
            (RawPatternKind::Exact, Some(path)) => {
                SpecificationPattern::exact(PackagePath::parse(&path)?)
            }
            (RawPatternKind::Subtree, Some(path)) => {
                SpecificationPattern::subtree(PackagePath::parse(&path)?)
            }
        };
        Ok(if raw.negated { pattern.negated() } else { pattern })
    }
}

impl TryFrom<RawPatternSet> for PatternSet {
    type Error = ConfigError;

    fn try_from(raw: RawPatternSet) -> Result<Self, Self::Error> {
        raw.patterns
            .into_iter()
            .map(SpecificationPattern::try_from)
            .collect::<Result<_, _>>()
    }
}

impl TryFrom<RawPackageConfiguration> for PackageConfiguration {
    type Error = ConfigError;

    fn try_from(raw: RawPackageConfiguration) -> Result<Self, Self::Error> {
        let pattern_sets: Vec<PatternSet> = raw
            .pattern_sets
            .into_iter()
            .map(PatternSet::try_from)
            .collect::<Result<_, _>>()?;

        tracing::debug!(
            "validated package configuration: {} pattern set(s), {} option(s), {} artifact(s)",
            pattern_sets.len(),
            raw.compiler_options.len(),
            raw.data.len(),
        );

        Ok(PackageConfiguration::new(
            pattern_sets,
            raw.compiler_options,
            raw.data.into_iter().map(ArtifactRef::from).collect(),
        ))
    }
}

#[cfg(test)]
#[path = "raw_tests.rs"]
mod tests;
