//! 历史日志维护: 按保留天数删除, 压缩已结束的日志文件.

use super::LoggingConfig;
use anyhow::{Context, Result};
use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// 维护结果统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    /// 删除的文件数
    pub removed: usize,
    /// 压缩的文件数
    pub compressed: usize,
}

/// 以今天 (UTC, 与滚动文件名的日期一致) 为基准清理日志目录
pub fn cleanup_logs(config: &LoggingConfig) -> Result<CleanupReport> {
    cleanup_logs_at(config, Utc::now().date_naive())
}

/// 以 `today` 为基准清理日志目录
///
/// 早于 `today - retention_days` 的文件被删除; 其余非当天的未压缩文件
/// 在 `compress_history` 打开时压缩为 `.gz`. 与前缀不匹配的文件不动.
pub(crate) fn cleanup_logs_at(config: &LoggingConfig, today: NaiveDate) -> Result<CleanupReport> {
    let directory = Path::new(&config.directory);
    let mut report = CleanupReport::default();
    if !directory.exists() {
        return Ok(report);
    }

    let cutoff = today - ChronoDuration::days(config.retention_days);
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        let Some((date, compressed)) = parse_log_name(&file_name, &config.file_prefix) else {
            continue;
        };
        let file_path = entry.path();

        if date < cutoff {
            if fs::remove_file(&file_path).is_ok() {
                report.removed += 1;
            }
            continue;
        }

        if config.compress_history && !compressed && date < today {
            compress_to_gz(&file_path)?;
            report.compressed += 1;
        }
    }

    Ok(report)
}

fn compress_to_gz(path: &Path) -> Result<()> {
    let gz_path = PathBuf::from(format!("{}.gz", path.display()));
    if gz_path.exists() {
        return Ok(());
    }

    let mut input =
        File::open(path).with_context(|| format!("打开待压缩日志失败, path={}", path.display()))?;
    let output = File::create(&gz_path)
        .with_context(|| format!("创建压缩日志失败, path={}", gz_path.display()))?;
    let mut encoder = GzEncoder::new(output, Compression::default());
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
        .with_context(|| format!("删除已压缩日志失败, path={}", path.display()))?;
    Ok(())
}

/// 解析 `<prefix>.YYYY-MM-DD.log[.gz]`
fn parse_log_name(file_name: &str, prefix: &str) -> Option<(NaiveDate, bool)> {
    let rest = file_name.strip_prefix(prefix)?.strip_prefix('.')?;
    let (date_part, compressed) = match rest.strip_suffix(".log.gz") {
        Some(date_part) => (date_part, true),
        None => (rest.strip_suffix(".log")?, false),
    };
    if date_part.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    Some((date, compressed))
}
