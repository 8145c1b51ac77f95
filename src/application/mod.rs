pub mod config;
pub mod invoker;

pub use config::{Config, UsagePolicy};
pub use invoker::{SearchInvoker, UsageCheck};
