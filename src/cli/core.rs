//! Error and control-flow types shared by the shell loop and its commands.

use std::io;

use thiserror::Error;

use crate::errors::ExpenseError;

use super::input::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single menu operation. The shell reports it and keeps going,
/// except when the input source has run dry.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] ExpenseError),
}

impl CommandError {
    pub(crate) fn is_end_of_input(&self) -> bool {
        matches!(self, CommandError::Input(InputError::Eof))
    }

    pub(crate) fn is_interrupt(&self) -> bool {
        matches!(self, CommandError::Input(InputError::Interrupted))
    }
}

/// Failure that ends the whole session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Input(err) => CliError::Input(err),
            CommandError::Io(err) => CliError::Io(err),
            CommandError::Core(err) => CliError::Core(err),
        }
    }
}
