use std::process::ExitStatus;

use crate::domain::SearchCommand;
use super::error::{InvokeError, EXIT_TROUBLE};

/// 运行命令并阻塞等待结束，子进程继承当前进程的标准输入输出
pub fn run_inherited(command: &SearchCommand) -> Result<ExitStatus, InvokeError> {
    command
        .to_process()
        .status()
        .map_err(|err| InvokeError::from_spawn(command.program().to_string_lossy(), err))
}

/// 将子进程的结束状态转换为本进程的退出码
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return (code & 0xff) as u8;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        // 被信号终止时沿用 shell 的 128 + 信号值
        if let Some(signal) = status.signal() {
            return (128 + (signal & 0x7f)) as u8;
        }
    }

    EXIT_TROUBLE
}
