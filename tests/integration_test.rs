//! Integration tests for sortr
//!
//! These tests verify end-to-end consolidation runs against temporary
//! directory trees: link placement, idempotent re-runs, per-entry failure
//! isolation and ignore handling.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use sortr::consolidate::{Consolidator, Outcome};
use sortr::filters::IgnoreRules;
use sortr::patterns::NamePattern;
use tempfile::TempDir;

/// Helper to build an input directory populated with the given folders
fn setup_tree(folders: &[&str]) -> (TempDir, PathBuf, PathBuf) {
    let root = TempDir::new().unwrap();
    let in_dir = root.path().join("albums");
    let out_dir = root.path().join("by-genre");
    fs::create_dir(&in_dir).unwrap();
    for name in folders {
        fs::create_dir(in_dir.join(name)).unwrap();
    }
    (root, in_dir, out_dir)
}

fn default_consolidator() -> Consolidator {
    Consolidator::new(NamePattern::default_convention(), IgnoreRules::default())
}

fn assert_links_to(dest: &Path, source: &Path) {
    let meta = fs::symlink_metadata(dest).unwrap();
    assert!(meta.file_type().is_symlink(), "{} is not a symlink", dest.display());
    assert_eq!(fs::read_link(dest).unwrap(), source);
}

#[test]
fn test_example_scenario_two_linked_one_failed() {
    let (_root, in_dir, out_dir) = setup_tree(&[
        "[Jazz] Kind of Blue",
        "[jazz] Bitches Brew",
        "randomfile",
    ]);

    let report = default_consolidator().run(&in_dir, &out_dir).unwrap();

    assert_eq!(report.linked, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.failed, 1);

    assert_links_to(
        &out_dir.join("jazz").join("Kind of Blue"),
        &in_dir.join("[Jazz] Kind of Blue"),
    );
    assert_links_to(
        &out_dir.join("jazz").join("Bitches Brew"),
        &in_dir.join("[jazz] Bitches Brew"),
    );

    let (name, reason) = report.problems().next().unwrap();
    assert_eq!(name, "randomfile");
    assert!(reason.contains("malformed name"));
}

#[test]
fn test_rerun_is_idempotent() {
    let (_root, in_dir, out_dir) = setup_tree(&["[Rock] The Wall", "[rock] Animals"]);

    let first = default_consolidator().run(&in_dir, &out_dir).unwrap();
    assert_eq!(first.linked, 2);
    assert_eq!(first.failed, 0);

    let second = default_consolidator().run(&in_dir, &out_dir).unwrap();
    assert_eq!(second.linked, 2);
    assert_eq!(second.failed, 0, "pre-existing links must not fail a re-run");

    assert_links_to(
        &out_dir.join("rock").join("The Wall"),
        &in_dir.join("[Rock] The Wall"),
    );
    assert_links_to(
        &out_dir.join("rock").join("Animals"),
        &in_dir.join("[rock] Animals"),
    );
}

#[test]
fn test_stale_link_is_replaced_not_duplicated() {
    let (_root, in_dir, out_dir) = setup_tree(&["[rock] Animals"]);

    fs::create_dir_all(out_dir.join("rock")).unwrap();
    std::os::unix::fs::symlink(
        in_dir.join("gone-after-rename"),
        out_dir.join("rock").join("Animals"),
    )
    .unwrap();

    let report = default_consolidator().run(&in_dir, &out_dir).unwrap();
    assert_eq!(report.linked, 1);
    assert_eq!(report.failed, 0);
    assert_links_to(
        &out_dir.join("rock").join("Animals"),
        &in_dir.join("[rock] Animals"),
    );
}

#[test]
fn test_occupied_destination_fails_only_that_entry() {
    let (_root, in_dir, out_dir) = setup_tree(&["[rock] Animals", "[rock] The Wall"]);

    // A real directory already sits in one destination slot
    let occupied = out_dir.join("rock").join("Animals");
    fs::create_dir_all(&occupied).unwrap();
    fs::write(occupied.join("keep.txt"), b"user data").unwrap();

    let report = default_consolidator().run(&in_dir, &out_dir).unwrap();

    assert_eq!(report.linked, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.total(), 2);

    // The other entry still linked
    assert_links_to(
        &out_dir.join("rock").join("The Wall"),
        &in_dir.join("[rock] The Wall"),
    );

    // User data survived
    assert!(occupied.join("keep.txt").exists());
    let (name, reason) = report.problems().next().unwrap();
    assert_eq!(name, "[rock] Animals");
    assert!(reason.contains("occupied"));
}

#[test]
fn test_case_insensitive_grouping_shares_one_folder() {
    let (_root, in_dir, out_dir) = setup_tree(&["[Rock] A", "[rock] B", "[ROCK] C"]);

    let report = default_consolidator().run(&in_dir, &out_dir).unwrap();
    assert_eq!(report.linked, 3);

    let groups: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(groups, vec!["rock"]);

    for member in ["A", "B", "C"] {
        assert!(out_dir.join("rock").join(member).exists());
    }
}

#[test]
fn test_ignore_group_takes_precedence_over_member() {
    let (_root, in_dir, out_dir) = setup_tree(&["[jazz] Kind of Blue", "[rock] Animals"]);

    let rules = IgnoreRules::new(vec!["jazz".into()], vec![]);
    let report = Consolidator::new(NamePattern::default_convention(), rules)
        .run(&in_dir, &out_dir)
        .unwrap();

    assert_eq!(report.linked, 1);
    assert_eq!(report.skipped, 1);
    assert!(!out_dir.join("jazz").exists());

    let (name, reason) = report.problems().next().unwrap();
    assert_eq!(name, "[jazz] Kind of Blue");
    assert!(reason.contains("ignore rule"));
}

#[test]
fn test_empty_ignore_strings_never_skip() {
    let (_root, in_dir, out_dir) = setup_tree(&["[jazz] Kind of Blue"]);

    let rules = IgnoreRules::new(vec![String::new()], vec![String::new()]);
    let report = Consolidator::new(NamePattern::default_convention(), rules)
        .run(&in_dir, &out_dir)
        .unwrap();

    assert_eq!(report.linked, 1);
    assert_eq!(report.skipped, 0);
}

#[test]
fn test_plain_files_are_classified_and_linked_too() {
    let (_root, in_dir, out_dir) = setup_tree(&[]);
    fs::write(in_dir.join("[mix] roadtrip.m3u"), b"#EXTM3U").unwrap();

    let report = default_consolidator().run(&in_dir, &out_dir).unwrap();
    assert_eq!(report.linked, 1);
    assert_links_to(
        &out_dir.join("mix").join("roadtrip.m3u"),
        &in_dir.join("[mix] roadtrip.m3u"),
    );
}

#[test]
fn test_missing_input_dir_is_the_only_fatal_error() {
    let root = TempDir::new().unwrap();
    let result = default_consolidator().run(&root.path().join("nope"), &root.path().join("out"));
    assert!(result.is_err());
}

#[test]
fn test_dry_run_reports_plan_without_mutation() {
    let (_root, in_dir, out_dir) = setup_tree(&["[Jazz] Kind of Blue", "randomfile"]);

    let report = default_consolidator()
        .dry_run(true)
        .run(&in_dir, &out_dir)
        .unwrap();

    assert_eq!(report.linked, 1);
    assert_eq!(report.failed, 1);
    assert!(!out_dir.exists());

    let planned = report
        .entries
        .iter()
        .find_map(|e| match &e.outcome {
            Outcome::Linked { dest } => Some(dest.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(planned, out_dir.join("jazz").join("Kind of Blue"));
}

#[test]
fn test_custom_pattern_drives_grouping() {
    let (_root, in_dir, out_dir) = setup_tree(&["Jazz - Giant Steps", "Rock - Animals"]);

    let pattern = NamePattern::new(r"^(?P<group>\w+) - (?P<member>.+)$").unwrap();
    let report = Consolidator::new(pattern, IgnoreRules::default())
        .run(&in_dir, &out_dir)
        .unwrap();

    assert_eq!(report.linked, 2);
    assert_links_to(
        &out_dir.join("jazz").join("Giant Steps"),
        &in_dir.join("Jazz - Giant Steps"),
    );
}
