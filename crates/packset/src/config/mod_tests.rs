// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for the package configuration record.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::pattern::SpecificationPattern;

fn path(s: &str) -> PackagePath {
    PackagePath::parse(s).unwrap()
}

fn subtree_set(anchor: &str) -> PatternSet {
    PatternSet::new(vec![SpecificationPattern::subtree(path(anchor))])
}

#[test]
fn no_pattern_sets_matches_nothing() {
    let config = PackageConfiguration::new(vec![], vec!["-Xlint".into()], vec![]);
    assert!(!config.matches(&path("a")));
    assert!(!config.matches(&path("a/b/c")));
}

#[test]
fn matches_delegates_to_any_pattern_set() {
    let config = PackageConfiguration::new(
        vec![subtree_set("tools"), subtree_set("third_party")],
        vec![],
        vec![],
    );
    assert!(config.matches(&path("tools/compiler")));
    assert!(config.matches(&path("third_party/zlib")));
    assert!(!config.matches(&path("src")));
}

#[test]
fn inclusion_in_one_set_suffices() {
    let excludes = PatternSet::new(vec![
        SpecificationPattern::everything(),
        SpecificationPattern::subtree(path("a")).negated(),
    ]);
    let config = PackageConfiguration::new(vec![excludes, subtree_set("a")], vec![], vec![]);
    assert!(config.matches(&path("a/b")));
}

#[test]
fn options_returned_verbatim_in_order() {
    let options = vec!["-Werror".to_string(), "-Xlint:all".to_string(), "-Werror".to_string()];
    let config = PackageConfiguration::new(vec![], options.clone(), vec![]);
    // Options are not deduplicated; repetition is the compiler's business.
    assert_eq!(config.options(), options.as_slice());
}

#[test]
fn data_deduplicated_keeping_first_occurrence() {
    let config = PackageConfiguration::new(
        vec![],
        vec![],
        vec![
            ArtifactRef::from("jre/lib/security"),
            ArtifactRef::from("annotations.jar"),
            ArtifactRef::from("jre/lib/security"),
        ],
    );
    let rendered: Vec<&str> = config.data().iter().map(ArtifactRef::as_str).collect();
    assert_eq!(rendered, ["jre/lib/security", "annotations.jar"]);
}

#[test]
fn accessors_are_invariant_across_calls() {
    let config = PackageConfiguration::new(
        vec![subtree_set("a")],
        vec!["-g".into()],
        vec![ArtifactRef::from("tzdata")],
    );
    let p = path("a/b");
    for _ in 0..50 {
        assert!(config.matches(&p));
        assert_eq!(config.options(), ["-g".to_string()].as_slice());
        assert_eq!(config.data(), [ArtifactRef::from("tzdata")].as_slice());
    }
}

#[test]
fn artifact_ref_displays_its_id() {
    let artifact = ArtifactRef::new("lib/data.bin");
    assert_eq!(artifact.to_string(), "lib/data.bin");
    assert_eq!(artifact.as_str(), "lib/data.bin");
}
