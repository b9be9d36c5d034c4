//! Aggregations over an in-memory slice of expenses.
//!
//! These are pure functions; [`ExpenseService`](super::ExpenseService) feeds
//! them a fresh scan of the store on every call.

use std::collections::HashMap;

use crate::ledger::{Amount, Expense};

/// Sum of one category's amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Per-category sums, or the distinct "nothing to summarize" outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum CategorySummary {
    Empty,
    /// Categories in order of first appearance. Matching is case-sensitive.
    Totals(Vec<CategoryTotal>),
}

impl CategorySummary {
    pub fn grand_total(&self) -> f64 {
        match self {
            CategorySummary::Empty => 0.0,
            CategorySummary::Totals(totals) => {
                totals.iter().fold(0.0, |acc, entry| acc + entry.amount)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    NoMatches,
    /// Matching records in file order.
    Matches(Vec<Expense>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Exceeded,
    WithinBudget,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetReport {
    pub status: BudgetStatus,
    pub total: f64,
    pub limit: f64,
}

impl BudgetReport {
    /// Positive while within budget, negative by the overspend otherwise.
    pub fn remaining(&self) -> f64 {
        self.limit - self.total
    }
}

/// Starts from `+0.0`; `Iterator::sum` over `f64` starts from `-0.0`, which
/// would print an empty total as `-0.00`.
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().fold(0.0, |acc, expense| acc + expense.amount)
}

pub fn by_category(expenses: &[Expense]) -> CategorySummary {
    if expenses.is_empty() {
        return CategorySummary::Empty;
    }
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match index.get(expense.category.as_str()) {
            Some(&slot) => totals[slot].amount += expense.amount,
            None => {
                index.insert(expense.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    amount: expense.amount,
                });
            }
        }
    }
    CategorySummary::Totals(totals)
}

pub fn search(expenses: &[Expense], query: &str) -> SearchOutcome {
    let matches: Vec<Expense> = expenses
        .iter()
        .filter(|expense| expense.category_matches(query))
        .cloned()
        .collect();
    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(matches)
    }
}

/// Strictly greater than the limit is over budget; equal is still within.
pub fn budget(total: f64, limit: Amount) -> BudgetReport {
    let limit = limit.value();
    let status = if total > limit {
        BudgetStatus::Exceeded
    } else {
        BudgetStatus::WithinBudget
    };
    BudgetReport {
        status,
        total,
        limit,
    }
}
