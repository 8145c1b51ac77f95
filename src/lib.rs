// 分层结构
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

// 重新导出主要类型
pub use domain::{ExclusionList, SearchCommand, BASE_EXCLUDES};
pub use application::{Config, SearchInvoker, UsageCheck, UsagePolicy};
pub use infrastructure::{InvokeError, Logger, LoggerTrait};
pub use presentation::{format_duration, print_usage_hint};
