use std::io::{self, Write};
use std::time::Duration;

/// 缺少搜索参数时的提示
pub const USAGE_HINT: &str = "用法错误: 请提供要搜索的内容 (sgrep <模式> [grep 选项...])";

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}.{:03}s", secs, duration.subsec_millis())
    }
}

/// 输出用法提示，前后各留两个空行
pub fn write_usage_hint<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n\n{}\n", USAGE_HINT)?;
    out.flush()
}

pub fn print_usage_hint() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_usage_hint(&mut stdout)
}
