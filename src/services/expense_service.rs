//! Business logic over the expense store.

use crate::{
    config::Config,
    errors::Result,
    ledger::{Amount, Expense},
    storage::{SkippedRow, TextStore},
};

use super::summary::{self, BudgetReport, CategorySummary, SearchOutcome};

/// A computed view plus the rows that had to be skipped to produce it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan<T> {
    pub value: T,
    pub skipped: Vec<SkippedRow>,
}

impl<T> Scan<T> {
    fn new(value: T, skipped: Vec<SkippedRow>) -> Self {
        Self { value, skipped }
    }
}

/// Total spend and how many records contributed to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalReport {
    pub total: f64,
    pub records: usize,
}

/// Appends to and aggregates over a single [`TextStore`].
///
/// Every read operation rescans the whole store.
#[derive(Debug, Clone)]
pub struct ExpenseService {
    store: TextStore,
}

impl ExpenseService {
    pub fn new(store: TextStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(TextStore::new(&config.store_path))
    }

    pub fn store(&self) -> &TextStore {
        &self.store
    }

    pub fn ensure_store(&self) -> Result<()> {
        self.store.ensure_exists()
    }

    /// Validates and appends a new expense, returning the stored record.
    pub fn add(
        &self,
        date: &str,
        amount: Amount,
        category: &str,
        note: &str,
    ) -> Result<Expense> {
        let expense = Expense::new(date, amount, category, note)?;
        self.store.append(&expense)?;
        tracing::info!(
            date = %expense.date,
            amount = expense.amount,
            category = %expense.category,
            "expense added"
        );
        Ok(expense)
    }

    /// All well-formed records in file order.
    pub fn list(&self) -> Result<Scan<Vec<Expense>>> {
        let report = self.store.load()?;
        Ok(Scan::new(report.expenses, report.skipped))
    }

    pub fn total(&self) -> Result<Scan<TotalReport>> {
        let report = self.store.load()?;
        let value = TotalReport {
            total: summary::total(&report.expenses),
            records: report.expenses.len(),
        };
        Ok(Scan::new(value, report.skipped))
    }

    pub fn summarize_by_category(&self) -> Result<Scan<CategorySummary>> {
        let report = self.store.load()?;
        Ok(Scan::new(
            summary::by_category(&report.expenses),
            report.skipped,
        ))
    }

    pub fn search_by_category(&self, query: &str) -> Result<Scan<SearchOutcome>> {
        let report = self.store.load()?;
        Ok(Scan::new(
            summary::search(&report.expenses, query),
            report.skipped,
        ))
    }

    pub fn check_budget(&self, limit: Amount) -> Result<Scan<BudgetReport>> {
        let totals = self.total()?;
        Ok(Scan::new(
            summary::budget(totals.value.total, limit),
            totals.skipped,
        ))
    }
}
