//! 宿主程序的日志初始化.
//!
//! 解码库只通过 `log` 门面输出日志, 这里把它们桥接到 `tracing`:
//! 彩色控制台输出 + 按天滚动的纯文本文件. 初始化时同步执行一次历史日志维护.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, FormatEvent, FormatFields, format::Writer},
    layer::{Layer, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

mod maintenance;

pub use maintenance::{CleanupReport, cleanup_logs};

/// 日志配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` 语法的过滤规则, 如 `info,tremor_codec=debug`
    pub level: String,
    /// 日志目录
    pub directory: String,
    /// 文件名前缀, 文件名形如 `<prefix>.2026-02-06.log`
    pub file_prefix: String,
    /// 保留天数, 更早的文件在初始化时删除
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
    /// 是否把已结束的日志文件压缩为 `.gz`
    #[serde(default = "default_true")]
    pub compress_history: bool,
    /// 是否输出到控制台
    #[serde(default = "default_true")]
    pub console: bool,
}

fn default_true() -> bool {
    true
}

fn default_retention_days() -> i64 {
    30
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: "logs".to_string(),
            file_prefix: "tremor".to_string(),
            retention_days: default_retention_days(),
            compress_history: true,
            console: true,
        }
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// 安装全局日志订阅者
///
/// 进程内只能成功调用一次; 再次调用返回错误.
pub fn init(config: &LoggingConfig) -> Result<()> {
    std::fs::create_dir_all(&config.directory)
        .with_context(|| format!("创建日志目录失败, path={}", config.directory))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&config.file_prefix)
        .filename_suffix("log")
        .build(&config.directory)
        .context("创建滚动日志文件失败")?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::default()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(FileFormatter)
        .with_filter(EnvFilter::new(&config.level));

    let console_layer = config.console.then(|| {
        fmt::Layer::default()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .event_format(ConsoleFormatter)
            .with_filter(EnvFilter::new(&config.level))
    });

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("全局日志订阅者已存在")?;

    LOG_GUARD.set(guard).ok();

    if let Err(err) = maintenance::cleanup_logs(config) {
        tracing::warn!("启动时清理日志失败: {err:#}");
    }
    Ok(())
}

/// 某一天的日志文件路径, 日期按 UTC 计
pub fn log_path_for(directory: &Path, prefix: &str, date: NaiveDate) -> PathBuf {
    directory.join(format!("{}.{}.log", prefix, date.format("%Y-%m-%d")))
}

fn write_timestamp(writer: &mut Writer<'_>) -> std::fmt::Result {
    let now = Local::now();
    write!(
        writer,
        "[{:02}-{:02} {:02}:{:02}:{:02}.{:03}] ",
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        now.timestamp_subsec_millis()
    )
}

struct ConsoleFormatter;

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write_timestamp(&mut writer)?;
        let color = match *meta.level() {
            tracing::Level::ERROR => "\x1b[31m",
            tracing::Level::WARN => "\x1b[33m",
            tracing::Level::INFO => "\x1b[32m",
            _ => "\x1b[34m",
        };
        write!(
            writer,
            "{color}{:5}\x1b[0m {} > ",
            meta.level().to_string(),
            meta.target()
        )?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

struct FileFormatter;

impl<S, N> FormatEvent<S, N> for FileFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write_timestamp(&mut writer)?;
        write!(writer, "{:5} {} > ", meta.level().to_string(), meta.target())?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_日志文件路径() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 6);
        match date {
            Some(date) => {
                let path = log_path_for(Path::new("logs"), "tremor", date);
                assert_eq!(path, PathBuf::from("logs/tremor.2026-02-06.log"));
            }
            None => panic!("测试日期初始化失败"),
        }
    }

    #[test]
    fn test_配置默认值() {
        let config: LoggingConfig = serde_json::from_str(
            r#"{"level":"debug","directory":"/tmp/x","file_prefix":"dec"}"#,
        )
        .unwrap();
        assert_eq!(config.retention_days, 30);
        assert!(config.compress_history);
        assert!(config.console);
    }
}
