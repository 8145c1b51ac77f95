pub mod exclusions;
pub mod command;

pub use exclusions::{ExclusionList, BASE_EXCLUDES};
pub use command::{SearchCommand, DEFAULT_PROGRAM};
