//! Dry-run integration tests
//!
//! `checkout --dry-run` with local map files exercises the whole resolution
//! and planning pipeline end to end without needing an svn client or a
//! reachable repository.

mod common;

use common::{MapDir, sparsevn_cmd};
use predicates::prelude::*;

/// Position of the first occurrence of `needle` in `haystack`, panicking
/// with context when absent.
fn pos(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("expected {needle:?} in output:\n{haystack}"))
}

#[test]
fn test_plan_orders_parents_before_children() {
    let maps = MapDir::new();
    maps.write_map(
        "map.yaml",
        "files:\n  all:\n    - a\n    - a/b\n    - a/b/c@\n",
    );

    let output = sparsevn_cmd()
        .current_dir(&maps.path)
        .args(["checkout", "--dry-run", "-m", "map.yaml", "svn://server/trunk"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let a = pos(&stdout, "empty a\n");
    let ab = pos(&stdout, "empty a/b\n");
    let abc = pos(&stdout, "files a/b/c\n");
    assert!(a < ab, "parent must be planned before child:\n{stdout}");
    assert!(ab < abc, "parent must be planned before child:\n{stdout}");
}

#[test]
fn test_plan_puts_files_entries_first_at_equal_depth() {
    let maps = MapDir::new();
    maps.write_map("map.yaml", "files:\n  all: [z, 'y*', 'x@']\n");

    let output = sparsevn_cmd()
        .current_dir(&maps.path)
        .args(["checkout", "--dry-run", "-m", "map.yaml", "svn://server/trunk"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let x = pos(&stdout, "files x\n");
    let y = pos(&stdout, "infinity y\n");
    let z = pos(&stdout, "empty z\n");
    assert!(x < y && x < z, "files entry must be planned first:\n{stdout}");
}

#[test]
fn test_platform_filtering_linux() {
    let maps = MapDir::new();
    maps.write_map(
        "map.yaml",
        "files:\n  all: [shared]\n  linux: [posix-only]\n  windows: [win-only]\n",
    );

    sparsevn_cmd()
        .current_dir(&maps.path)
        .args([
            "checkout",
            "--dry-run",
            "--platform",
            "linux",
            "-m",
            "map.yaml",
            "svn://server/trunk",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("posix-only"))
        .stdout(predicate::str::contains("win-only").not())
        .stdout(predicate::str::contains("shared"));
}

#[test]
fn test_platform_filtering_windows() {
    let maps = MapDir::new();
    maps.write_map(
        "map.yaml",
        "files:\n  all: [shared]\n  linux: [posix-only]\n  windows: [win-only]\n",
    );

    sparsevn_cmd()
        .current_dir(&maps.path)
        .args([
            "checkout",
            "--dry-run",
            "--platform",
            "windows",
            "-m",
            "map.yaml",
            "svn://server/trunk",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("win-only"))
        .stdout(predicate::str::contains("posix-only").not());
}

#[test]
fn test_base_is_stripped_and_appended_to_url() {
    let maps = MapDir::new();
    maps.write_map(
        "map.yaml",
        "base: build\nfiles:\n  all: ['build/tools*', 'docs@']\n",
    );

    sparsevn_cmd()
        .current_dir(&maps.path)
        .args(["checkout", "--dry-run", "-m", "map.yaml", "svn://server/trunk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("svn://server/trunk/build"))
        .stdout(predicate::str::contains("infinity tools"))
        .stdout(predicate::str::contains("files docs"))
        .stdout(predicate::str::contains("build/tools").not());
}

#[test]
fn test_local_includes_are_flattened() {
    let maps = MapDir::new();
    maps.write_map(
        "root.yaml",
        "include: extra.yaml\nfiles:\n  all: ['own@']\n",
    );
    maps.write_map("extra.yaml", "files:\n  all: ['included*']\n");

    sparsevn_cmd()
        .current_dir(&maps.path)
        .args(["checkout", "--dry-run", "-m", "root.yaml", "svn://server/trunk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("infinity included"))
        .stdout(predicate::str::contains("files own"));
}

#[test]
fn test_malformed_files_warns_but_succeeds() {
    let maps = MapDir::new();
    maps.write_map(
        "root.yaml",
        "include: extra.yaml\nfiles: just a string\n",
    );
    maps.write_map("extra.yaml", "files:\n  all: ['kept@']\n");

    sparsevn_cmd()
        .current_dir(&maps.path)
        .args(["checkout", "--dry-run", "-m", "root.yaml", "svn://server/trunk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("files kept"))
        .stderr(predicate::str::contains("not a mapping"));
}

#[test]
fn test_missing_include_is_fatal() {
    let maps = MapDir::new();
    maps.write_map(
        "root.yaml",
        "include: ghost-map.yaml\nfiles:\n  all: [a]\n",
    );

    sparsevn_cmd()
        .current_dir(&maps.path)
        .args([
            "checkout",
            "--dry-run",
            "-m",
            "root.yaml",
            "svn://127.0.0.1/repo",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost-map.yaml"));
}

#[test]
fn test_include_cycle_is_fatal() {
    let maps = MapDir::new();
    maps.write_map("a.yaml", "include: b.yaml\n");
    maps.write_map("b.yaml", "include: a.yaml\n");

    sparsevn_cmd()
        .current_dir(&maps.path)
        .args(["checkout", "--dry-run", "-m", "a.yaml", "svn://server/trunk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Circular include"));
}

#[test]
fn test_multiple_maps_are_combined() {
    let maps = MapDir::new();
    maps.write_map("one.yaml", "files:\n  all: ['from-one@']\n");
    maps.write_map("two.yaml", "files:\n  all: ['from-two@']\n");

    sparsevn_cmd()
        .current_dir(&maps.path)
        .args([
            "checkout",
            "--dry-run",
            "-m",
            "one.yaml",
            "-m",
            "two.yaml",
            "svn://server/trunk",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("files from-one"))
        .stdout(predicate::str::contains("files from-two"));
}

#[test]
fn test_dry_run_is_deterministic() {
    let maps = MapDir::new();
    maps.write_map(
        "map.yaml",
        "files:\n  all: ['x/y/z*', 'a@', 'x/y@', m/n]\n",
    );

    let run = || {
        let output = sparsevn_cmd()
            .current_dir(&maps.path)
            .args(["checkout", "--dry-run", "-m", "map.yaml", "svn://server/trunk"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_default_map_is_code() {
    // No -m given and no local file named 'code': the fetch goes remote and
    // fails against the closed port, naming the default map.
    sparsevn_cmd()
        .args(["checkout", "--dry-run", "svn://127.0.0.1/repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'code'"));
}
