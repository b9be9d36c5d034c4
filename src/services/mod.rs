pub mod expense_service;
pub mod summary;

pub use expense_service::{ExpenseService, Scan, TotalReport};
pub use summary::{BudgetReport, BudgetStatus, CategorySummary, CategoryTotal, SearchOutcome};

#[cfg(test)]
mod tests;
