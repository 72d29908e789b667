#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{SharedBuf, body};
use levellog::{LevelLogger, config::Config, logger_info, logger_warning};
use std::fs;

#[test]
fn nonexistent_path_is_created_and_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");
    assert!(!path.exists());

    let mut logger = LevelLogger::new(SharedBuf::default());
    logger.set_file_sink(&path).expect("create log file");
    assert!(path.exists());

    logger_info!(logger, "started {}", "worker");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(body(lines[0]), "Info:started worker");
    assert!(content.ends_with('\n'));
}

#[test]
fn existing_file_is_appended_not_truncated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");
    fs::write(&path, "previous run\n").unwrap();

    let mut logger = LevelLogger::stderr();
    logger.set_file_sink(&path).unwrap();
    logger_warning!(logger, "second run");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "previous run");
    assert_eq!(body(lines[1]), "Warning:second run");
}

#[test]
fn reopening_the_same_file_keeps_appending() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");

    for run in 0..3 {
        let mut logger = LevelLogger::stderr();
        logger.set_file_sink(&path).unwrap();
        logger_info!(logger, "run {run}");
    }

    let content = fs::read_to_string(&path).unwrap();
    let bodies: Vec<&str> = content.lines().map(body).collect();
    assert_eq!(bodies, ["Info:run 0", "Info:run 1", "Info:run 2"]);
}

#[test]
fn directory_path_fails_and_keeps_previous_sink() {
    let dir = tempfile::tempdir().expect("tempdir");
    let buf = SharedBuf::default();
    let mut logger = LevelLogger::new(buf.clone());

    let err = logger.set_file_sink(dir.path());
    assert!(err.is_err(), "opening a directory for append must fail");

    logger_info!(logger, "after failure");
    assert_eq!(body(buf.contents().trim_end()), "Info:after failure");
}

#[test]
fn missing_parent_directory_fails_and_keeps_previous_sink() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("app.log");
    let buf = SharedBuf::default();
    let mut logger = LevelLogger::new(buf.clone());

    let err = logger.set_file_sink(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert!(!path.exists());

    logger_info!(logger, "still buffered");
    assert!(buf.contents().contains("Info:still buffered"));
}

#[test]
fn empty_path_returns_ok_and_keeps_previous_sink() {
    let buf = SharedBuf::default();
    let mut logger = LevelLogger::new(buf.clone());
    logger.set_file_sink("").expect("empty path is a no-op");
    logger_info!(logger, "kept");
    assert_eq!(body(buf.contents().trim_end()), "Info:kept");
}

#[test]
fn from_config_installs_configured_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("configured.log");
    let cfg_path = dir.path().join("app.conf");
    fs::write(
        &cfg_path,
        format!("# logger\n[Logging]\nlog_file = \"{}\"\n", path.display()),
    )
    .unwrap();

    let cfg = Config::load(&cfg_path).expect("load config");
    let logger = LevelLogger::from_config(&cfg).expect("logger from config");
    logger_info!(logger, "configured");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(body(content.trim_end()), "Info:configured");
}
