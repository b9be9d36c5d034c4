mod commands;
pub mod core;
pub mod input;
pub mod menu;
pub mod output;
pub mod prompts;
mod shell;
pub mod ui;

pub use self::core::{CliError, CommandError};
pub use shell::{run_cli, CliMode, Session, SCRIPT_ENV};
