use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::{Context, Result};

use sgrep::infrastructure::error::EXIT_TROUBLE;
use sgrep::{Config, InvokeError, Logger, SearchInvoker};

/// 在当前目录下递归 grep，自动跳过依赖、构建和第三方目录。
/// 除程序名外的所有参数原样转发给 grep。
fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("sgrep: {:#}", err);
            let code = err
                .downcast_ref::<InvokeError>()
                .map_or(EXIT_TROUBLE, InvokeError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<u8> {
    // 不经过参数解析，保留 `--`、`-h` 等原始参数
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let config = Config::from_env().context("配置错误")?;

    let logger = match Logger::new(config.log_enabled, &config.log_dir) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("sgrep: 警告: {:#}，本次不记录日志", err);
            Logger::disabled()
        }
    };

    let invoker = SearchInvoker::new(&config, &logger);
    let code = invoker.run(&args)?;
    Ok(code)
}
