use std::fs;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with an empty environment, run from a scratch directory so no
/// stray `.env` is picked up.
fn rfw(vars: &[(&str, &str)]) -> (Command, TempDir) {
    let workdir = tempfile::tempdir().expect("temp workdir");
    let mut cmd = cargo_bin_cmd!("rfw");
    cmd.env_clear().current_dir(workdir.path());
    for (key, value) in vars {
        cmd.env(key, value);
    }
    (cmd, workdir)
}

#[test]
fn loads_urls_and_bucket() {
    let (mut cmd, _dir) = rfw(&[
        ("DATA_BUCKET", "my-bucket"),
        ("URL_1", "http://a"),
        ("URL_2", "http://b"),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Starting remote file watcher"))
        .stdout(predicate::str::contains("URL_1 loaded as http://a"))
        .stdout(predicate::str::contains("URL_2 loaded as http://b"))
        .stdout(predicate::str::contains("DATA_BUCKET loaded as my-bucket"))
        .stdout(predicate::str::contains(r#"["http://a", "http://b"]"#))
        .stderr(predicate::str::is_empty());
}

#[test]
fn gap_truncates_and_warns() {
    let (mut cmd, _dir) = rfw(&[
        ("DATA_BUCKET", "b"),
        ("URL_1", "http://a"),
        ("URL_2", ""),
        ("URL_3", "http://c"),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"["http://a"]"#))
        .stdout(predicate::str::contains("URL_3 loaded as").not())
        .stdout(predicate::str::contains("URL_3 is set but ignored"));
}

#[test]
fn missing_first_url_aborts_before_bucket() {
    let (mut cmd, _dir) = rfw(&[("DATA_BUCKET", "b")]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("URL_1 not found"))
        .stdout(predicate::str::contains("DATA_BUCKET loaded as").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_bucket_aborts_after_urls() {
    let (mut cmd, _dir) = rfw(&[("URL_1", "http://a")]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("URL_1 loaded as http://a"))
        .stdout(predicate::str::contains("DATA_BUCKET not set"));
}

#[test]
fn empty_bucket_is_rejected() {
    let (mut cmd, _dir) = rfw(&[("URL_1", "http://a"), ("DATA_BUCKET", "")]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("DATA_BUCKET not set"));
}

#[test]
fn reads_dotenv_from_working_directory() {
    let (mut cmd, dir) = rfw(&[("URL_1", "http://process")]);
    fs::write(dir.path().join(".env"), "DATA_BUCKET=from-dotenv\nURL_1=http://ignored\n")
        .expect("write .env");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Loaded env file"))
        .stdout(predicate::str::contains("DATA_BUCKET loaded as from-dotenv"))
        .stdout(predicate::str::contains("URL_1 loaded as http://process"));
}

#[test]
fn unreadable_explicit_env_file_aborts() {
    let (mut cmd, _dir) = rfw(&[
        ("RFW_ENV_FILE", "does-not-exist.env"),
        ("DATA_BUCKET", "b"),
        ("URL_1", "http://a"),
    ]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("does-not-exist.env"));
}

#[test]
fn debug_flag_enables_debug_output() {
    let (mut cmd, _dir) = rfw(&[("DATA_BUCKET", "b"), ("URL_1", "http://a"), ("DEBUG", "true")]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DEBUG"))
        .stdout(predicate::str::contains("hashes/url_1.sha256"));
}

#[test]
fn debug_in_dotenv_enables_debug_output() {
    let (mut cmd, dir) = rfw(&[("DATA_BUCKET", "b"), ("URL_1", "http://a")]);
    fs::write(dir.path().join(".env"), "DEBUG=true\n").expect("write .env");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Loaded env file"))
        .stdout(predicate::str::contains("hashes/url_1.sha256"));
}

#[cfg(unix)]
#[test]
fn non_utf8_first_url_counts_as_unset() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let (mut cmd, _dir) = rfw(&[("DATA_BUCKET", "b")]);
    cmd.env("URL_1", OsStr::from_bytes(b"http://\xff"));

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("URL_1 not found"));
}
