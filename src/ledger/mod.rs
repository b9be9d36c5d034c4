//! Expense domain models and their on-disk text representation.

pub mod amount;
pub mod expense;

pub use amount::{format_amount, Amount, AmountError};
pub use expense::{Expense, RecordError, FIELD_COUNT, FIELD_DELIMITER};
