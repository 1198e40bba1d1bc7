pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{AdapterArgs, CliArgs, Commands, InitArgs, ResolveArgs};
pub use output::{OutputFormat, OutputFormatter};
