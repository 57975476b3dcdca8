//! 日志系统集成测试.
//!
//! 全局订阅者在进程内只能安装一次, 因此所有依赖 `init` 的检查放在同一个测试中.

use chrono::{Duration, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::TempDir;
use tremor::logging::{CleanupReport, LoggingConfig, cleanup_logs, init, log_path_for};

fn config_for(dir: &Path, prefix: &str) -> LoggingConfig {
    LoggingConfig {
        level: "info".to_string(),
        directory: dir.to_string_lossy().to_string(),
        file_prefix: prefix.to_string(),
        retention_days: 7,
        compress_history: true,
        console: false,
    }
}

/// 目录下所有未压缩日志的内容
fn read_logs(dir: &Path, prefix: &str) -> String {
    let mut content = String::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with(prefix) && name.ends_with(".log") {
                content.push_str(&fs::read_to_string(entry.path()).unwrap_or_default());
            }
        }
    }
    content
}

/// 非阻塞写入由后台线程完成, 轮询直到出现期望内容
fn wait_for(dir: &Path, prefix: &str, needle: &str) -> String {
    let start = Instant::now();
    loop {
        let content = read_logs(dir, prefix);
        if content.contains(needle) || start.elapsed().as_secs() >= 5 {
            return content;
        }
        std::thread::sleep(std::time::Duration::from_millis(20));
    }
}

#[test]
fn test_初始化写入与启动清理() {
    let dir = TempDir::new().unwrap();
    let log_dir = dir.path().join("logs");
    fs::create_dir_all(&log_dir).unwrap();

    let today = Utc::now().date_naive();
    let expired = log_path_for(&log_dir, "tremor-test", today - Duration::days(30));
    let yesterday = log_path_for(&log_dir, "tremor-test", today - Duration::days(1));
    fs::write(&expired, "expired").unwrap();
    fs::write(&yesterday, "yesterday").unwrap();

    let config = config_for(&log_dir, "tremor-test");
    init(&config).unwrap();

    assert!(!expired.exists(), "过期日志应被删除");
    assert!(!yesterday.exists(), "历史日志应被压缩");
    assert!(PathBuf::from(format!("{}.gz", yesterday.display())).exists());

    // 库代码走 log 门面, 宿主直接用 tracing, 两者都落到同一文件
    tracing::info!("tracing 消息_INFO_12345");
    log::warn!("log 门面消息_WARN_67890");
    tracing::debug!("被过滤的消息_DEBUG");

    let content = wait_for(&log_dir, "tremor-test", "log 门面消息_WARN_67890");
    assert!(content.contains("tracing 消息_INFO_12345"), "内容:\n{content}");
    assert!(content.contains("log 门面消息_WARN_67890"), "内容:\n{content}");
    assert!(content.contains("INFO"));
    assert!(content.contains("WARN"));
    assert!(!content.contains("被过滤的消息_DEBUG"));
    assert!(!content.contains("\x1b["), "文件日志不应包含颜色控制符");

    // 全局订阅者只能安装一次
    let other = TempDir::new().unwrap();
    assert!(init(&config_for(other.path(), "again")).is_err());
}

#[test]
fn test_保留天数边界() {
    let dir = TempDir::new().unwrap();
    let today = Utc::now().date_naive();
    let mut config = config_for(dir.path(), "edge");
    config.retention_days = 3;
    config.compress_history = false;

    let keep = log_path_for(dir.path(), "edge", today - Duration::days(3));
    let drop = log_path_for(dir.path(), "edge", today - Duration::days(4));
    let other_prefix = log_path_for(dir.path(), "other", today - Duration::days(40));
    for path in [&keep, &drop, &other_prefix] {
        fs::write(path, "x").unwrap();
    }

    let report = cleanup_logs(&config).unwrap();
    assert_eq!(
        report,
        CleanupReport {
            removed: 1,
            compressed: 0
        }
    );
    assert!(keep.exists());
    assert!(!drop.exists());
    assert!(other_prefix.exists());
}

#[test]
fn test_配置从json读取() {
    let config: LoggingConfig = serde_json::from_str(
        r#"{"level":"warn,tremor_codec=trace","directory":"logs","file_prefix":"tremor","console":false}"#,
    )
    .unwrap();
    assert_eq!(config.level, "warn,tremor_codec=trace");
    assert!(!config.console);
    assert!(config.compress_history);
    assert_eq!(config.retention_days, 30);

    let default = LoggingConfig::default();
    assert_eq!(default.directory, "logs");
    assert!(default.console);
}
