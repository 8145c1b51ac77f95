pub mod error;
pub mod logging;
pub mod process;

pub use error::InvokeError;
pub use logging::{Logger, LoggerTrait};
pub use process::{exit_code, run_inherited};
