use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::DEFAULT_PROGRAM;

pub const ENV_PROGRAM: &str = "SGREP_PROGRAM";
pub const ENV_STRICT_USAGE: &str = "SGREP_STRICT_USAGE";
pub const ENV_LOG: &str = "SGREP_LOG";
pub const ENV_LOG_DIR: &str = "SGREP_LOG_DIR";

/// 缺少参数时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsagePolicy {
    /// 输出提示后照常执行
    #[default]
    Permissive,
    /// 输出提示后直接退出
    Strict,
}

/// 应用程序配置
///
/// 排除目录列表是固定的，这里只有运行时开关，全部来自环境变量。
#[derive(Debug, Clone)]
pub struct Config {
    /// 搜索程序
    pub program: String,
    pub usage_policy: UsagePolicy,
    /// 是否写诊断日志
    pub log_enabled: bool,
    /// 日志目录
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            usage_policy: UsagePolicy::Permissive,
            log_enabled: false,
            log_dir: std::env::temp_dir(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过查找函数加载配置，未设置的项使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(program) = lookup(ENV_PROGRAM) {
            config.program = program;
        }

        if let Some(value) = lookup(ENV_STRICT_USAGE) {
            let strict = parse_bool(&value)
                .with_context(|| format!("无效的环境变量 {}", ENV_STRICT_USAGE))?;
            config.usage_policy = if strict {
                UsagePolicy::Strict
            } else {
                UsagePolicy::Permissive
            };
        }

        if let Some(value) = lookup(ENV_LOG) {
            config.log_enabled =
                parse_bool(&value).with_context(|| format!("无效的环境变量 {}", ENV_LOG))?;
        }

        if let Some(dir) = lookup(ENV_LOG_DIR) {
            if !dir.is_empty() {
                config.log_dir = PathBuf::from(dir);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            anyhow::bail!("{} 不能为空", ENV_PROGRAM);
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("无法识别的布尔值: {:?}", other),
    }
}
