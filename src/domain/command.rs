use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::{Command, Stdio};

use super::exclusions::ExclusionList;

/// 默认的搜索程序
pub const DEFAULT_PROGRAM: &str = "grep";

/// 递归搜索参数
pub const RECURSIVE_FLAG: &str = "-R";

/// 搜索根目录（当前目录）
pub const SEARCH_ROOT: &str = ".";

/// 构造好的搜索命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl SearchCommand {
    /// 构建命令：`[program, -R] ++ 排除参数 ++ 用户参数 ++ [.]`
    ///
    /// 用户参数原样保留，不排序、不去重、不校验。
    pub fn build<P, A>(program: P, exclusions: &ExclusionList, user_args: &[A]) -> Self
    where
        P: Into<OsString>,
        A: AsRef<OsStr>,
    {
        let mut args = Vec::with_capacity(exclusions.len() + user_args.len() + 2);
        args.push(OsString::from(RECURSIVE_FLAG));
        args.extend(exclusions.flags().map(OsString::from));
        args.extend(user_args.iter().map(|arg| arg.as_ref().to_os_string()));
        args.push(OsString::from(SEARCH_ROOT));

        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// 不含程序名的参数列表
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// 完整的 argv（含程序名）
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// 转换为继承标准输入输出的子进程命令
    pub fn to_process(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

impl fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
