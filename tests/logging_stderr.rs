//! The channel contract: stdout carries only the rename log, every
//! diagnostic goes to stderr.

use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn diagnostics_stay_on_stderr() {
    let td = tempdir().unwrap();
    fs::create_dir(td.path().join("top")).unwrap();
    fs::write(td.path().join("top/Messy Name.TXT"), b"x").unwrap();

    let me = cargo::cargo_bin!("tidypath");
    let out = Command::new(me)
        .current_dir(td.path())
        .args(["-v", "top/"])
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "  Messy Name.TXT => messy_name.txt\n",
        "stdout must hold the rename log and nothing else"
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Rewrite completed"), "stderr: {stderr}");
}

#[test]
fn quiet_silences_the_diagnostics() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("Messy Name.TXT"), b"x").unwrap();

    let me = cargo::cargo_bin!("tidypath");
    let out = Command::new(me)
        .current_dir(td.path())
        .args(["--log-level", "quiet", "Messy Name.TXT"])
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        !stderr.contains("Rewrite completed"),
        "quiet keeps stderr empty on success: {stderr}"
    );
    assert!(td.path().join("messy_name.txt").exists());
}

#[test]
fn unknown_log_level_warns_and_still_runs() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("Messy Name.TXT"), b"x").unwrap();

    let me = cargo::cargo_bin!("tidypath");
    let out = Command::new(me)
        .current_dir(td.path())
        .args(["--log-level", "loud", "Messy Name.TXT"])
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unknown log level"), "stderr: {stderr}");
    assert!(td.path().join("messy_name.txt").exists());
}
