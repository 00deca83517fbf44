//! Dry-run integration tests for the lnf CLI.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_dry_run_prints_intended_actions() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir_all(src.join("sub")).unwrap();
    fs::write(src.join("file.txt"), "x").unwrap();
    fs::write(src.join("sub/deep.txt"), "y").unwrap();

    cargo_bin_cmd!("lnf")
        .arg("-n")
        .arg(&src)
        .arg(root.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("mkdir"))
        .stdout(predicate::str::contains("link"))
        .stdout(predicate::str::contains("file.txt"))
        .stdout(predicate::str::contains("deep.txt"));
}

#[test]
fn test_dry_run_reports_copies() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("data.bin"), "x").unwrap();

    cargo_bin_cmd!("lnf")
        .arg("-n")
        .arg("-c")
        .arg(".*data\\.bin")
        .arg(&src)
        .arg(root.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("data.bin"));
}

#[test]
fn test_dry_run_reports_hard_links() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("file.txt"), "x").unwrap();

    cargo_bin_cmd!("lnf")
        .arg("-n")
        .arg("-l")
        .arg(&src)
        .arg(root.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("hardlink"));
}

#[test]
fn test_dry_run_leaves_destination_interior_untouched() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir_all(src.join("sub")).unwrap();
    fs::write(src.join("file.txt"), "x").unwrap();

    let dst = root.path().join("out");
    cargo_bin_cmd!("lnf")
        .arg("-n")
        .arg(&src)
        .arg(&dst)
        .assert()
        .success();

    // The destination root itself is created, but nothing inside it.
    assert!(dst.is_dir());
    assert_eq!(fs::read_dir(&dst).unwrap().count(), 0);
}

#[test]
fn test_dry_run_surfaces_conflicts() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir_all(src.join("sub")).unwrap();
    fs::write(src.join("sub/file.txt"), "x").unwrap();

    let dst = root.path().join("out");
    fs::create_dir(&dst).unwrap();
    fs::write(dst.join("sub"), "in the way").unwrap();

    cargo_bin_cmd!("lnf")
        .arg("-n")
        .arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("file-blocks-directory"));
}

#[cfg(unix)]
#[test]
fn test_dry_run_matches_real_run() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir_all(src.join("dir-a")).unwrap();
    fs::write(src.join("file.txt"), "x").unwrap();
    fs::write(src.join("dir-a/nested.txt"), "y").unwrap();

    let preview = cargo_bin_cmd!("lnf")
        .arg("-n")
        .arg(&src)
        .arg(root.path().join("preview-out"))
        .assert()
        .success();
    let stdout = String::from_utf8(preview.get_output().stdout.clone()).unwrap();

    let real = root.path().join("real-out");
    cargo_bin_cmd!("lnf").arg(&src).arg(&real).assert().success();

    // Every path the preview named exists in the real view.
    let mut checked = 0;
    for line in stdout.lines() {
        if let Some(target) = line.rsplit(' ').next() {
            let relative = target.replace("preview-out", "real-out");
            assert!(
                std::path::Path::new(&relative).exists(),
                "preview named {target} but the real run did not produce it"
            );
            checked += 1;
        }
    }
    assert!(checked >= 3, "expected mkdir and two links in the preview");
}
