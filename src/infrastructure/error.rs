use std::io;

use thiserror::Error;

/// 子进程无法启动时使用的退出码（与 shell 约定一致）
pub const EXIT_NOT_FOUND: u8 = 127;
pub const EXIT_PERMISSION_DENIED: u8 = 126;
pub const EXIT_TROUBLE: u8 = 2;

/// 启动搜索程序时的错误
#[derive(Debug, Error)]
pub enum InvokeError {
    /// 找不到搜索程序
    #[error("找不到搜索程序: {program}")]
    ProgramNotFound {
        program: String,
        #[source]
        source: io::Error,
    },
    /// 没有执行权限
    #[error("无权限执行搜索程序: {program}")]
    PermissionDenied {
        program: String,
        #[source]
        source: io::Error,
    },
    /// 其他启动失败
    #[error("无法启动搜索程序: {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl InvokeError {
    /// 根据 io 错误类型分类
    pub fn from_spawn(program: impl Into<String>, source: io::Error) -> Self {
        let program = program.into();
        match source.kind() {
            io::ErrorKind::NotFound => InvokeError::ProgramNotFound { program, source },
            io::ErrorKind::PermissionDenied => InvokeError::PermissionDenied { program, source },
            _ => InvokeError::Spawn { program, source },
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            InvokeError::ProgramNotFound { .. } => EXIT_NOT_FOUND,
            InvokeError::PermissionDenied { .. } => EXIT_PERMISSION_DENIED,
            InvokeError::Spawn { .. } => EXIT_TROUBLE,
        }
    }

    pub fn program(&self) -> &str {
        match self {
            InvokeError::ProgramNotFound { program, .. }
            | InvokeError::PermissionDenied { program, .. }
            | InvokeError::Spawn { program, .. } => program,
        }
    }
}
