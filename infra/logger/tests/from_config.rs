use avatar_domain::config::LogConfig;
use avatar_logger::{Logger, LoggerError};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

// One process, one global subscriber: only the first successful init wins, so the
// file-writing case and the double-init case live in the same test.
#[test]
#[serial]
fn from_config_writes_json_lines_and_refuses_second_init() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LogConfig {
        level: "debug".to_owned(),
        filter: None,
        path: Some(log_dir.clone()),
        json: true,
    };

    let logger = Logger::from_config("avatar-integration", &config)?;
    assert!(logger.guard().is_some(), "file output needs a worker guard");

    tracing::info!(route = "/avatar", "rendered");

    let err = Logger::from_config("avatar-integration-second", &LogConfig::default())
        .expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }), "got {err}");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let first = contents.lines().next().expect("at least one line");
    let line: serde_json::Value = serde_json::from_str(first)?;
    assert_eq!(line["fields"]["message"], "rendered");
    assert_eq!(line["fields"]["route"], "/avatar");

    Ok(())
}

#[test]
#[serial]
fn from_config_rejects_unknown_level() {
    let config = LogConfig { level: "chatty".to_owned(), ..LogConfig::default() };
    let err = Logger::from_config("avatar-integration", &config).unwrap_err();
    assert_eq!(err.kind(), "InvalidConfiguration");
}
