//! Request-validate-retry cycles over an [`InputSource`].

use std::io::Write;

use crate::ledger::{expense::validate_field, Amount, AmountError};

use super::core::CommandError;
use super::input::InputSource;
use super::output::Output;

/// A validated amount and how many times the user had to be asked again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedAmount {
    pub amount: Amount,
    pub reprompts: usize,
}

/// Reads one line, echoing the prompt when the source does not render it.
pub fn prompt_line<I, W>(
    input: &mut I,
    output: &mut Output<W>,
    label: &str,
) -> Result<String, CommandError>
where
    I: InputSource,
    W: Write,
{
    let prompt = format!("{label}: ");
    if !input.shows_prompt() {
        output.prompt(label)?;
    }
    Ok(input.read_line(&prompt)?)
}

/// Asks until the answer parses as a number strictly greater than zero.
///
/// Only end of input, an interrupt or an I/O failure leave the loop early.
pub fn prompt_positive_amount<I, W>(
    input: &mut I,
    output: &mut Output<W>,
    label: &str,
) -> Result<ValidatedAmount, CommandError>
where
    I: InputSource,
    W: Write,
{
    let mut reprompts = 0;
    loop {
        let raw = prompt_line(input, output, label)?;
        match raw.parse::<Amount>() {
            Ok(amount) => return Ok(ValidatedAmount { amount, reprompts }),
            Err(AmountError::NotANumber(_)) => {
                output.warning("Please enter a valid number.")?;
            }
            Err(AmountError::NotPositive) => {
                output.warning("Amount must be greater than zero.")?;
            }
            Err(AmountError::TooLarge(_)) => {
                output.warning("Amount is too large.")?;
            }
        }
        reprompts += 1;
        tracing::debug!(reprompts, "amount rejected, asking again");
    }
}

/// Asks for free-form text, refusing values that would corrupt a stored row.
/// Surrounding whitespace is trimmed.
pub fn prompt_field<I, W>(
    input: &mut I,
    output: &mut Output<W>,
    field: &'static str,
    label: &str,
) -> Result<String, CommandError>
where
    I: InputSource,
    W: Write,
{
    loop {
        let raw = prompt_line(input, output, label)?;
        let value = raw.trim();
        match validate_field(field, value) {
            Ok(()) => return Ok(value.to_string()),
            Err(err) => output.warning(format!("{err}. Please try again."))?,
        }
    }
}
