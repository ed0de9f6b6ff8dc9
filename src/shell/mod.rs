//! Child process execution.

pub mod command;

pub use command::{execute, format_command, CommandOptions, CommandResult};
