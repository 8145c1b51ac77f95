use std::ffi::OsString;
use std::time::Instant;

use crate::application::config::{Config, UsagePolicy};
use crate::domain::{ExclusionList, SearchCommand};
use crate::infrastructure::error::{InvokeError, EXIT_TROUBLE};
use crate::infrastructure::{process, LoggerTrait};
use crate::presentation;

/// 参数检查结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageCheck {
    Ok,
    /// 缺少参数，提示后继续执行
    Warned,
    /// 缺少参数，提示后退出
    Rejected,
}

/// 构造 grep 调用并执行
pub struct SearchInvoker<'a> {
    config: &'a Config,
    exclusions: ExclusionList,
    logger: &'a dyn LoggerTrait,
}

impl<'a> SearchInvoker<'a> {
    pub fn new(config: &'a Config, logger: &'a dyn LoggerTrait) -> Self {
        Self {
            config,
            exclusions: ExclusionList::standard(),
            logger,
        }
    }

    /// 替换排除列表
    pub fn with_exclusions(mut self, exclusions: ExclusionList) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn exclusions(&self) -> &ExclusionList {
        &self.exclusions
    }

    pub fn check_usage(&self, args: &[OsString]) -> UsageCheck {
        if !args.is_empty() {
            return UsageCheck::Ok;
        }

        match self.config.usage_policy {
            UsagePolicy::Permissive => UsageCheck::Warned,
            UsagePolicy::Strict => UsageCheck::Rejected,
        }
    }

    pub fn command(&self, args: &[OsString]) -> SearchCommand {
        SearchCommand::build(self.config.program.as_str(), &self.exclusions, args)
    }

    /// 执行搜索，返回本进程应使用的退出码
    pub fn run(&self, args: &[OsString]) -> Result<u8, InvokeError> {
        let usage = self.check_usage(args);
        if usage != UsageCheck::Ok {
            // 提示输出失败不影响搜索
            let _ = presentation::print_usage_hint();
            let _ = self.logger.log_message("未提供搜索参数");
        }
        if usage == UsageCheck::Rejected {
            let _ = self.logger.finalize(EXIT_TROUBLE, std::time::Duration::ZERO);
            return Ok(EXIT_TROUBLE);
        }

        let command = self.command(args);
        let _ = self.logger.log_message(&format!("执行命令: {}", command));

        let start_time = Instant::now();
        let status = match process::run_inherited(&command) {
            Ok(status) => status,
            Err(err) => {
                let _ = self.logger.log_message(&format!("错误: {}", err));
                let _ = self.logger.finalize(err.exit_code(), start_time.elapsed());
                return Err(err);
            }
        };

        let code = process::exit_code(status);
        let _ = self.logger.log_message(&format!("子进程结束: {}", status));
        let _ = self.logger.finalize(code, start_time.elapsed());

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use anyhow::Result;

    /// 记录日志内容，便于断言
    #[derive(Default)]
    struct RecordingLogger {
        messages: Mutex<Vec<String>>,
        exit_codes: Mutex<Vec<u8>>,
    }

    impl LoggerTrait for RecordingLogger {
        fn is_enabled(&self) -> bool {
            true
        }

        fn log_message(&self, message: &str) -> Result<()> {
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }

        fn finalize(&self, exit_code: u8, _duration: Duration) -> Result<()> {
            self.exit_codes.lock().unwrap().push(exit_code);
            Ok(())
        }
    }

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    fn config_with(program: &str, usage_policy: UsagePolicy) -> Config {
        Config {
            program: program.to_string(),
            usage_policy,
            ..Config::default()
        }
    }

    #[test]
    fn test_check_usage() {
        let logger = RecordingLogger::default();
        let permissive = config_with("grep", UsagePolicy::Permissive);
        let strict = config_with("grep", UsagePolicy::Strict);

        let invoker = SearchInvoker::new(&permissive, &logger);
        assert_eq!(invoker.check_usage(&args(&["foo"])), UsageCheck::Ok);
        assert_eq!(invoker.check_usage(&[]), UsageCheck::Warned);

        let invoker = SearchInvoker::new(&strict, &logger);
        assert_eq!(invoker.check_usage(&args(&["foo"])), UsageCheck::Ok);
        assert_eq!(invoker.check_usage(&[]), UsageCheck::Rejected);
    }

    #[test]
    fn test_command_uses_config_and_exclusions() {
        let logger = RecordingLogger::default();
        let config = config_with("grep", UsagePolicy::Permissive);
        let invoker = SearchInvoker::new(&config, &logger)
            .with_exclusions(ExclusionList::from_base(["build"]));

        assert_eq!(
            invoker.command(&args(&["foo"])).to_string(),
            "grep -R --exclude-dir=build --exclude-dir=./build foo ."
        );
        assert_eq!(
            invoker.command(&[]).to_string(),
            "grep -R --exclude-dir=build --exclude-dir=./build ."
        );
    }

    #[test]
    fn test_default_exclusions_are_standard() {
        let logger = RecordingLogger::default();
        let config = Config::default();
        let invoker = SearchInvoker::new(&config, &logger);
        assert_eq!(invoker.exclusions(), &ExclusionList::standard());
    }

    #[test]
    fn test_strict_usage_does_not_spawn() {
        let logger = RecordingLogger::default();
        // 程序不存在，若被执行会返回错误
        let config = config_with("sgrep-test-no-such-program", UsagePolicy::Strict);
        let invoker = SearchInvoker::new(&config, &logger);

        assert_eq!(invoker.run(&[]).unwrap(), 2);
        let messages = logger.messages.lock().unwrap();
        assert!(!messages.iter().any(|m| m.starts_with("执行命令")));
    }

    #[cfg(unix)]
    #[test]
    fn test_permissive_usage_still_runs() {
        let logger = RecordingLogger::default();
        let config = config_with("true", UsagePolicy::Permissive);
        let invoker = SearchInvoker::new(&config, &logger)
            .with_exclusions(ExclusionList::from_base(["build"]));

        assert_eq!(invoker.run(&[]).unwrap(), 0);

        let messages = logger.messages.lock().unwrap();
        assert_eq!(messages[0], "未提供搜索参数");
        assert_eq!(
            messages[1],
            "执行命令: true -R --exclude-dir=build --exclude-dir=./build ."
        );
        assert_eq!(*logger.exit_codes.lock().unwrap(), vec![0]);
    }

    #[cfg(unix)]
    #[test]
    fn test_child_exit_code_is_relayed() {
        let logger = RecordingLogger::default();
        let config = config_with("false", UsagePolicy::Permissive);
        let invoker = SearchInvoker::new(&config, &logger);

        assert_eq!(invoker.run(&args(&["-l", "foo"])).unwrap(), 1);
        assert_eq!(*logger.exit_codes.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_missing_program_is_error() {
        let logger = RecordingLogger::default();
        let config = config_with("sgrep-test-no-such-program", UsagePolicy::Permissive);
        let invoker = SearchInvoker::new(&config, &logger);

        let err = invoker.run(&args(&["foo"])).unwrap_err();
        assert!(matches!(err, InvokeError::ProgramNotFound { .. }));
        assert_eq!(*logger.exit_codes.lock().unwrap(), vec![127]);
    }
}
