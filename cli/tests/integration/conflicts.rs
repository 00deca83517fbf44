//! Conflict handling integration tests for the lnf CLI.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_blocks_directory_aborts() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir_all(src.join("sub")).unwrap();
    fs::write(src.join("sub/file.txt"), "x").unwrap();

    let dst = root.path().join("out");
    fs::create_dir(&dst).unwrap();
    // A file sits where the mirrored "sub" directory must go.
    fs::write(dst.join("sub"), "in the way").unwrap();

    cargo_bin_cmd!("lnf")
        .arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("file-blocks-directory"))
        .stderr(predicate::str::contains("remove the conflicting file"));

    // The occupant is untouched.
    assert_eq!(fs::read_to_string(dst.join("sub")).unwrap(), "in the way");
}

#[cfg(unix)]
#[test]
fn test_target_exists_aborts_run() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("aaa.txt"), "first").unwrap();
    fs::write(src.join("zzz.txt"), "last").unwrap();

    let dst = root.path().join("out");
    fs::create_dir(&dst).unwrap();
    fs::write(dst.join("zzz.txt"), "occupied").unwrap();

    cargo_bin_cmd!("lnf")
        .arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("target-exists"));

    // The occupant is never replaced.
    assert_eq!(fs::read_to_string(dst.join("zzz.txt")).unwrap(), "occupied");
    assert!(!dst.join("zzz.txt").is_symlink());
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_counts_as_existing_target() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("file.txt"), "x").unwrap();

    let dst = root.path().join("out");
    fs::create_dir(&dst).unwrap();
    std::os::unix::fs::symlink("gone", dst.join("file.txt")).unwrap();

    cargo_bin_cmd!("lnf")
        .arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("target-exists"));
}

#[test]
fn test_directory_blocks_file_copy() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("data.bin"), "payload").unwrap();

    let dst = root.path().join("out");
    fs::create_dir(&dst).unwrap();
    fs::create_dir(dst.join("data.bin")).unwrap();

    cargo_bin_cmd!("lnf")
        .arg("-c")
        .arg(".*data\\.bin")
        .arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("directory-blocks-file"))
        .stderr(predicate::str::contains("remove the conflicting directory"));
}

#[test]
fn test_copy_overwrites_existing_regular_file() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("data.bin"), "fresh").unwrap();

    let dst = root.path().join("out");
    fs::create_dir(&dst).unwrap();
    fs::write(dst.join("data.bin"), "stale").unwrap();

    // Copy targets are the one place an existing file is replaced.
    cargo_bin_cmd!("lnf")
        .arg("-c")
        .arg(".*data\\.bin")
        .arg(&src)
        .arg(&dst)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dst.join("data.bin")).unwrap(), "fresh");
}

#[test]
fn test_rerun_into_existing_view_conflicts() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("in");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("file.txt"), "x").unwrap();

    let dst = root.path().join("out");
    cargo_bin_cmd!("lnf").arg(&src).arg(&dst).assert().success();

    // The links created by the first run block the second.
    cargo_bin_cmd!("lnf")
        .arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("target-exists"));
}
