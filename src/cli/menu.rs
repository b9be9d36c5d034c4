use std::io::{self, Write};

use super::output::Output;

pub const BANNER: &str = "SMART EXPENSE TRACKER";
pub const CHOICE_PROMPT: &str = "Choose an option (1-7)";

/// The seven entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Total,
    Summary,
    Search,
    Budget,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Total,
        MenuChoice::Summary,
        MenuChoice::Search,
        MenuChoice::Budget,
        MenuChoice::Exit,
    ];

    /// Exact match on `1`..`7`; anything else, including padded input, is
    /// not a choice.
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == input)
    }

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::Add => "1",
            MenuChoice::View => "2",
            MenuChoice::Total => "3",
            MenuChoice::Summary => "4",
            MenuChoice::Search => "5",
            MenuChoice::Budget => "6",
            MenuChoice::Exit => "7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Expense",
            MenuChoice::View => "View All Expenses",
            MenuChoice::Total => "View Total Expense",
            MenuChoice::Summary => "Category-wise Summary",
            MenuChoice::Search => "Search by Category",
            MenuChoice::Budget => "Budget Alert",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub fn render<W: Write>(output: &mut Output<W>) -> io::Result<()> {
    output.section(BANNER)?;
    for choice in MenuChoice::ALL {
        output.plain(format!("{}. {}", choice.key(), choice.label()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_exact_keys() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn keys_follow_menu_order() {
        for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.key(), (idx + 1).to_string());
        }
    }
}
