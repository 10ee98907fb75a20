// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Package-specification matching for per-package compiler configuration.
//!
//! A build tool's rule-analysis phase holds a list of package
//! configurations, each guarded by sets of package-specification patterns:
//! exact packages, recursive subtrees, the everything wildcard, and negated
//! exclusions of any of those. For a target's package path, every
//! configuration whose patterns contain that path contributes its compiler
//! options and data artifacts to the target's compile action.
//!
//! This crate is the matching core of that machinery: the validated
//! [`PackagePath`] value type, the pattern model and matcher in [`pattern`],
//! and the immutable [`PackageConfiguration`] record in [`config`]. Loading
//! and flattening authored configuration (named groups, includes) into the
//! raw representation is the embedding tool's job; everything here is pure,
//! immutable, and freely shareable across concurrent match queries.
//!
//! # Example
//!
//! ```
//! use packset::{PackageConfiguration, PackagePath, PatternSet, SpecificationPattern};
//!
//! let set = PatternSet::new(vec![
//!     SpecificationPattern::subtree("vendor".parse()?),
//!     SpecificationPattern::exact("vendor/generated".parse()?).negated(),
//! ]);
//! let config = PackageConfiguration::new(vec![set], vec!["-Werror".into()], vec![]);
//!
//! assert!(config.matches(&"vendor/lib".parse()?));
//! assert!(!config.matches(&"vendor/generated".parse()?));
//! # Ok::<(), packset::PathError>(())
//! ```

pub mod config;
pub mod path;
pub mod pattern;

pub use config::{
    ArtifactRef, ConfigError, ConfigurationSet, PackageConfiguration, RawPackageConfiguration,
    RawPattern, RawPatternKind, RawPatternSet,
};
pub use path::{PackagePath, PathError};
pub use pattern::{PatternScope, PatternSet, SpecificationPattern, contained_in_any};
