pub mod display;

pub use display::{format_duration, print_usage_hint, write_usage_hint, USAGE_HINT};
