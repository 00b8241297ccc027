//! Logging installs one global subscriber per process, so this file holds a
//! single test.

use snapclean_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

#[test]
fn json_logs_go_to_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("snapclean.log");
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        format: LogFormat::Json,
        log_file: Some(path.clone()),
        ..LogConfig::default()
    };

    init_logging(&config).expect("init logging");
    tracing::info!(target: "snapclean_cli", rows = 3, "loaded table");
    tracing::debug!(target: "snapclean_cli", "filtered out");

    let contents = std::fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    let event: serde_json::Value = serde_json::from_str(lines[0]).expect("json line");
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "loaded table");
    assert_eq!(event["fields"]["rows"], 3);
}
