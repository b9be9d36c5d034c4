use std::io::{self, IsTerminal, Write};

use crate::config::{Config, ConfigManager};
use crate::services::ExpenseService;

use super::core::{CliError, CommandError, LoopControl};
use super::input::{InputError, InputSource, LineInput, TerminalInput};
use super::menu::{self, MenuChoice, CHOICE_PROMPT};
use super::output::{Output, OutputPreferences};
use super::prompts::prompt_line;

pub const SCRIPT_ENV: &str = "EXPENSE_TRACKER_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    /// Script mode when forced through the environment or when stdin is piped.
    pub fn detect() -> Self {
        if std::env::var_os(SCRIPT_ENV).is_some() || !io::stdin().is_terminal() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

pub fn run_cli() -> Result<(), CliError> {
    let config = ConfigManager::new().load()?;
    let mode = CliMode::detect();
    tracing::info!(?mode, store = %config.store_path.display(), "starting session");

    match mode {
        CliMode::Interactive => {
            let input = TerminalInput::new()?;
            Session::from_config(&config, input, io::stdout()).run()
        }
        CliMode::Script => {
            let input = LineInput::new(io::stdin().lock());
            Session::from_config(&config, input, io::stdout()).run()
        }
    }
}

/// One interactive session: the menu loop plus what it needs to serve it.
pub struct Session<I, W> {
    pub(crate) service: ExpenseService,
    pub(crate) input: I,
    pub(crate) output: Output<W>,
}

impl<I: InputSource, W: Write> Session<I, W> {
    pub fn new(service: ExpenseService, input: I, output: Output<W>) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    pub fn from_config(config: &Config, input: I, writer: W) -> Self {
        Self::new(
            ExpenseService::from_config(config),
            input,
            Output::new(writer, OutputPreferences::from(config)),
        )
    }

    /// Makes sure the store exists, then shows the menu until the user exits
    /// or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        self.service.ensure_store()?;

        loop {
            menu::render(&mut self.output)?;
            let line = match prompt_line(&mut self.input, &mut self.output, CHOICE_PROMPT) {
                Ok(line) => line,
                Err(CommandError::Input(InputError::Eof)) => {
                    self.output.info("End of input. Exiting.")?;
                    break;
                }
                Err(CommandError::Input(InputError::Interrupted)) => {
                    self.output.info("Interrupted. Exiting.")?;
                    break;
                }
                Err(err) => return Err(err.into()),
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                self.output
                    .warning("Invalid choice. Please select 1-7.")?;
                continue;
            };

            match self.dispatch(choice) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(err) if err.is_end_of_input() => {
                    self.output.info("End of input. Exiting.")?;
                    break;
                }
                Err(err) if err.is_interrupt() => {
                    self.output.warning("Operation cancelled.")?;
                }
                Err(err) => self.report_error(err)?,
            }
        }

        tracing::info!("session finished");
        Ok(())
    }

    pub fn into_parts(self) -> (I, W) {
        (self.input, self.output.into_inner())
    }

    fn report_error(&mut self, err: CommandError) -> Result<(), CliError> {
        tracing::error!(error = %err, "operation failed");
        self.output.error(err)?;
        Ok(())
    }
}
