use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;

use crate::presentation::format_duration;

/// 日志记录器trait
pub trait LoggerTrait: Send + Sync {
    fn is_enabled(&self) -> bool;
    fn log_message(&self, message: &str) -> Result<()>;
    fn finalize(&self, exit_code: u8, duration: Duration) -> Result<()>;
}

/// 诊断日志记录器
///
/// 只写文件，不向标准输出写任何内容（标准输出归 grep 所有）。
pub struct Logger {
    log_file: Arc<Mutex<Option<File>>>,
    log_path: PathBuf,
    enabled: bool,
}

impl Logger {
    /// 不写任何内容的日志记录器
    pub fn disabled() -> Self {
        Self {
            log_file: Arc::new(Mutex::new(None)),
            log_path: PathBuf::new(),
            enabled: false,
        }
    }

    /// 创建新的日志记录器，日志文件位于 `dir` 下
    pub fn new(enabled: bool, dir: &Path) -> Result<Self> {
        if !enabled {
            return Ok(Self::disabled());
        }

        // 获取当前时间作为文件名的一部分
        let now = Local::now();
        let timestamp = now.format("%Y%m%d_%H%M%S");
        let log_path = dir.join(format!("sgrep_{}.log", timestamp));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("无法创建日志文件: {}", log_path.display()))?;

        // 写入UTF-8 BOM以确保文件被正确识别为UTF-8
        let mut file_clone = file.try_clone()?;
        file_clone.write_all(&[0xEF, 0xBB, 0xBF])?;

        writeln!(file_clone, "# sgrep 运行日志")?;
        writeln!(file_clone, "# 开始时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file_clone, "# --------------------------------------------")?;

        Ok(Self {
            log_file: Arc::new(Mutex::new(Some(file))),
            log_path,
            enabled: true,
        })
    }

    /// 获取日志文件路径
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

impl LoggerTrait for Logger {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn log_message(&self, message: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if let Ok(mut file_guard) = self.log_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "[{}] {}", timestamp, message)?;
                file.flush()?;
            }
        }

        Ok(())
    }

    fn finalize(&self, exit_code: u8, duration: Duration) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let now = Local::now();

        if let Ok(mut file_guard) = self.log_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "# --------------------------------------------")?;
                writeln!(file, "# 结束时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
                writeln!(file, "# 总用时: {}", format_duration(duration))?;
                writeln!(file, "# 退出码: {}", exit_code)?;
                file.flush()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_disabled_logger() {
        let logger = Logger::new(false, Path::new("/nonexistent")).unwrap();
        assert!(!logger.is_enabled());
        assert!(logger.log_message("ignored").is_ok());
        assert!(logger.finalize(0, Duration::from_millis(5)).is_ok());
    }

    #[test]
    fn test_logger_writes_file() {
        let temp_dir = tempdir().unwrap();
        let logger = Logger::new(true, temp_dir.path()).unwrap();
        assert!(logger.is_enabled());
        assert!(logger.log_path().starts_with(temp_dir.path()));

        let logger_trait: &dyn LoggerTrait = &logger;
        logger_trait.log_message("执行命令: grep -R .").unwrap();
        logger_trait.finalize(1, Duration::from_millis(1500)).unwrap();

        let bytes = fs::read(logger.log_path()).unwrap();
        assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));

        let content = String::from_utf8_lossy(&bytes);
        assert!(content.contains("# sgrep 运行日志"));
        assert!(content.contains("执行命令: grep -R ."));
        assert!(content.contains("# 总用时: 1.500s"));
        assert!(content.contains("# 退出码: 1"));
    }

    #[test]
    fn test_logger_missing_dir() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing");
        assert!(Logger::new(true, &missing).is_err());
    }
}
