use std::fmt;

use thiserror::Error;

use super::amount::{format_amount, Amount};
use crate::errors::ExpenseError;

/// Separates the fields of a stored record. Never escaped.
pub const FIELD_DELIMITER: char = ',';

/// Number of fields on every well-formed line: date, amount, category, note.
pub const FIELD_COUNT: usize = 4;

/// Why a stored line could not be turned into an [`Expense`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {} fields, found {found}", FIELD_COUNT)]
    FieldCount { found: usize },
    #[error("amount `{value}` is not a number")]
    Amount { value: String },
    #[error("row is not valid UTF-8")]
    Encoding,
}

/// One logged expense.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub note: String,
}

impl Expense {
    /// Builds a record from user input, rejecting text that would break the
    /// one-line, comma-separated layout.
    pub fn new(
        date: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, ExpenseError> {
        let expense = Self {
            date: date.into(),
            amount: amount.value(),
            category: category.into(),
            note: note.into(),
        };
        validate_field("date", &expense.date)?;
        validate_field("category", &expense.category)?;
        validate_field("note", &expense.note)?;
        Ok(expense)
    }

    /// Parses one stored line.
    ///
    /// Only the line terminator is stripped (whitespace around the amount is
    /// tolerated when parsing it), so
    /// `parse_line(&expense.to_line()) == Ok(expense)` holds for any record
    /// whose text fields are free of the delimiter. A field containing `,`
    /// shifts the split and the line comes back as [`RecordError::FieldCount`].
    pub fn parse_line(line: &str) -> Result<Self, RecordError> {
        let line = line.trim_end_matches(['\n', '\r']);
        let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let [date, amount, category, note] = parts.as_slice() else {
            return Err(RecordError::FieldCount { found: parts.len() });
        };
        let amount = amount
            .trim()
            .parse::<f64>()
            .map_err(|_| RecordError::Amount {
                value: amount.to_string(),
            })?;
        Ok(Self {
            date: date.to_string(),
            amount,
            category: category.to_string(),
            note: note.to_string(),
        })
    }

    /// Serializes the record without a line terminator.
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    /// Case-insensitive comparison against the stored category.
    pub fn category_matches(&self, query: &str) -> bool {
        self.category.to_lowercase() == query.to_lowercase()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{date}{d}{amount}{d}{category}{d}{note}",
            date = self.date,
            amount = format_amount(self.amount),
            category = self.category,
            note = self.note,
            d = FIELD_DELIMITER,
        )
    }
}

/// Rejects text that cannot be stored without corrupting the row layout.
pub fn validate_field(field: &'static str, value: &str) -> Result<(), ExpenseError> {
    if value.contains(FIELD_DELIMITER) {
        return Err(ExpenseError::InvalidField {
            field,
            reason: format!("the `{FIELD_DELIMITER}` delimiter"),
        });
    }
    if value.contains(['\n', '\r']) {
        return Err(ExpenseError::InvalidField {
            field,
            reason: "line breaks".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(value: f64) -> Amount {
        Amount::new(value).unwrap()
    }

    #[test]
    fn formats_fields_in_store_order() {
        let expense = Expense::new("2024-01-01", amount(50.0), "Food", "lunch").unwrap();
        assert_eq!(expense.to_line(), "2024-01-01,50.0,Food,lunch");
    }

    #[test]
    fn round_trips_delimiter_free_records() {
        let expense = Expense::new("2024-03-09", amount(7.25), "Coffee & Tea", " oat latte ")
            .unwrap();
        assert_eq!(Expense::parse_line(&expense.to_line()), Ok(expense));
    }

    #[test]
    fn round_trip_breaks_when_a_field_holds_the_delimiter() {
        let expense = Expense {
            date: "2024-03-09".into(),
            amount: 3.0,
            category: "Food".into(),
            note: "bread, milk".into(),
        };
        assert_eq!(
            Expense::parse_line(&expense.to_line()),
            Err(RecordError::FieldCount { found: 5 })
        );
    }

    #[test]
    fn parses_lines_written_by_other_tools() {
        let expense = Expense::parse_line("2024-01-02,20,Food,snack\r\n").unwrap();
        assert_eq!(expense.amount, 20.0);
        assert_eq!(expense.note, "snack");
    }

    #[test]
    fn keeps_whitespace_in_text_fields() {
        let expense = Expense::parse_line(" 2024-01-02 , 20 ,Food, snack \n").unwrap();
        assert_eq!(expense.date, " 2024-01-02 ");
        assert_eq!(expense.amount, 20.0);
        assert_eq!(expense.note, " snack ");
    }

    #[test]
    fn field_count_message_names_the_expected_count() {
        let err = Expense::parse_line("a,b").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("expected {FIELD_COUNT} fields, found 2")
        );
    }

    #[test]
    fn reports_short_rows_and_bad_amounts() {
        assert_eq!(
            Expense::parse_line("2024-01-02,20,Food"),
            Err(RecordError::FieldCount { found: 3 })
        );
        assert_eq!(
            Expense::parse_line("2024-01-02,twenty,Food,snack"),
            Err(RecordError::Amount {
                value: "twenty".into()
            })
        );
    }

    #[test]
    fn new_rejects_delimiter_and_line_breaks() {
        let err = Expense::new("2024-01-01", amount(1.0), "Food", "a,b").unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidField { field: "note", .. }));
        let err = Expense::new("2024-01-01", amount(1.0), "Fo\nod", "ok").unwrap_err();
        assert!(matches!(
            err,
            ExpenseError::InvalidField {
                field: "category",
                ..
            }
        ));
    }

    #[test]
    fn category_match_ignores_case() {
        let expense = Expense::new("2024-01-03", amount(15.0), "Travel", "bus").unwrap();
        assert!(expense.category_matches("travel"));
        assert!(expense.category_matches("TRAVEL"));
        assert!(!expense.category_matches("trav"));
    }
}
