//! Handlers for the six menu operations.

use std::io::Write;

use chrono::{Local, NaiveDate};

use crate::services::{BudgetStatus, CategorySummary, SearchOutcome};
use crate::storage::SkippedRow;

use super::core::{CommandError, CommandResult, LoopControl};
use super::input::InputSource;
use super::menu::MenuChoice;
use super::prompts::{prompt_field, prompt_positive_amount};
use super::shell::Session;
use super::ui::table::{category_table, expense_table};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NOTHING_RECORDED: &str = "No expenses recorded yet.";

impl<I: InputSource, W: Write> Session<I, W> {
    pub(crate) fn dispatch(&mut self, choice: MenuChoice) -> Result<LoopControl, CommandError> {
        tracing::debug!(?choice, "dispatching menu choice");
        match choice {
            MenuChoice::Add => self.add_expense()?,
            MenuChoice::View => self.view_expenses()?,
            MenuChoice::Total => self.total_expense()?,
            MenuChoice::Summary => self.category_summary()?,
            MenuChoice::Search => self.search_by_category()?,
            MenuChoice::Budget => self.budget_alert()?,
            MenuChoice::Exit => {
                self.output
                    .info("Exiting... Thank you for using Expense Tracker!")?;
                return Ok(LoopControl::Exit);
            }
        }
        Ok(LoopControl::Continue)
    }

    fn add_expense(&mut self) -> CommandResult {
        let entered = prompt_field(
            &mut self.input,
            &mut self.output,
            "date",
            "Enter date (YYYY-MM-DD, blank for today)",
        )?;
        let date = if entered.is_empty() {
            Local::now().date_naive().format(DATE_FORMAT).to_string()
        } else {
            if NaiveDate::parse_from_str(&entered, DATE_FORMAT).is_err() {
                self.output.warning(format!(
                    "`{entered}` is not a YYYY-MM-DD date; saving it as entered."
                ))?;
            }
            entered
        };
        let amount = prompt_positive_amount(&mut self.input, &mut self.output, "Enter amount")?;
        let category = prompt_field(
            &mut self.input,
            &mut self.output,
            "category",
            "Enter category (Food/Travel/etc)",
        )?;
        let note = prompt_field(&mut self.input, &mut self.output, "note", "Enter note")?;

        self.service.add(&date, amount.amount, &category, &note)?;
        self.output.success("Expense added successfully!")?;
        Ok(())
    }

    fn view_expenses(&mut self) -> CommandResult {
        let scan = self.service.list()?;
        self.report_skipped(&scan.skipped)?;
        if scan.value.is_empty() {
            self.output.info(NOTHING_RECORDED)?;
            return Ok(());
        }
        self.output.section("All Expenses")?;
        self.output.plain(expense_table(&scan.value).render())?;
        Ok(())
    }

    fn total_expense(&mut self) -> CommandResult {
        let scan = self.service.total()?;
        self.report_skipped(&scan.skipped)?;
        self.output
            .success(format!("Total Expense: {:.2}", scan.value.total))?;
        if scan.value.records == 0 {
            self.output.info(NOTHING_RECORDED)?;
        }
        Ok(())
    }

    fn category_summary(&mut self) -> CommandResult {
        let scan = self.service.summarize_by_category()?;
        self.report_skipped(&scan.skipped)?;
        let summary = scan.value;
        let CategorySummary::Totals(totals) = &summary else {
            self.output.info(NOTHING_RECORDED)?;
            return Ok(());
        };
        self.output.section("Category-wise Summary")?;
        self.output.plain(category_table(totals).render())?;
        self.output.separator()?;
        self.output
            .plain(format!("All categories: {:.2}", summary.grand_total()))?;
        Ok(())
    }

    fn search_by_category(&mut self) -> CommandResult {
        let query = prompt_field(
            &mut self.input,
            &mut self.output,
            "search term",
            "Enter category to search",
        )?;
        let scan = self.service.search_by_category(&query)?;
        self.report_skipped(&scan.skipped)?;
        match scan.value {
            SearchOutcome::NoMatches => self
                .output
                .info(format!("No expenses found for category `{query}`."))?,
            SearchOutcome::Matches(found) => {
                self.output
                    .section(format!("Expenses in `{query}` ({})", found.len()))?;
                self.output.plain(expense_table(&found).render())?;
            }
        }
        Ok(())
    }

    fn budget_alert(&mut self) -> CommandResult {
        let limit =
            prompt_positive_amount(&mut self.input, &mut self.output, "Enter budget limit")?;
        let scan = self.service.check_budget(limit.amount)?;
        self.report_skipped(&scan.skipped)?;
        let report = scan.value;
        match report.status {
            BudgetStatus::Exceeded => self.output.error(format!(
                "Budget exceeded! Spent {:.2} of {:.2} (over by {:.2}).",
                report.total,
                report.limit,
                -report.remaining()
            ))?,
            BudgetStatus::WithinBudget => self.output.success(format!(
                "You are within your budget. Spent {:.2} of {:.2} ({:.2} left).",
                report.total,
                report.limit,
                report.remaining()
            ))?,
        }
        Ok(())
    }

    fn report_skipped(&mut self, skipped: &[SkippedRow]) -> CommandResult {
        let Some(first) = skipped.first() else {
            return Ok(());
        };
        self.output.warning(format!(
            "Skipped {} malformed row(s) in {} (first at line {}: {}).",
            skipped.len(),
            self.service.store().path().display(),
            first.line_number,
            first.reason
        ))?;
        Ok(())
    }
}
