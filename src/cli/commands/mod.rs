pub mod check;
mod command_result;
mod context;
pub mod dedupe;
pub mod init;

pub use command_result::*;
pub use context::RunContext;
