use std::fs;

use tempfile::TempDir;

use crate::errors::ExpenseError;
use crate::ledger::{Amount, RecordError};
use crate::services::{
    BudgetStatus, CategorySummary, CategoryTotal, ExpenseService, SearchOutcome,
};
use crate::storage::TextStore;

fn amount(value: f64) -> Amount {
    Amount::new(value).unwrap()
}

fn empty_service(dir: &TempDir) -> ExpenseService {
    let service = ExpenseService::new(TextStore::new(dir.path().join("expenses.csv")));
    service.ensure_store().unwrap();
    service
}

fn seeded_service(dir: &TempDir) -> ExpenseService {
    let service = empty_service(dir);
    service
        .add("2024-01-01", amount(50.0), "Food", "lunch")
        .unwrap();
    service
        .add("2024-01-02", amount(20.0), "Food", "snack")
        .unwrap();
    service
        .add("2024-01-03", amount(15.0), "Travel", "bus")
        .unwrap();
    service
}

#[test]
fn empty_store_reports_nothing_recorded() {
    let dir = TempDir::new().unwrap();
    let service = empty_service(&dir);

    assert!(service.list().unwrap().value.is_empty());
    let total = service.total().unwrap().value;
    assert_eq!(total.total, 0.0);
    assert!(!total.total.is_sign_negative());
    assert_eq!(total.records, 0);
    assert!(!service
        .check_budget(amount(5.0))
        .unwrap()
        .value
        .total
        .is_sign_negative());
    assert_eq!(
        service.summarize_by_category().unwrap().value,
        CategorySummary::Empty
    );
    assert_eq!(
        service.search_by_category("food").unwrap().value,
        SearchOutcome::NoMatches
    );
}

#[test]
fn seeded_scenario_matches_expected_aggregates() {
    let dir = TempDir::new().unwrap();
    let service = seeded_service(&dir);

    assert!((service.total().unwrap().value.total - 85.0).abs() < 1e-9);

    let summary = service.summarize_by_category().unwrap().value;
    assert_eq!(
        summary,
        CategorySummary::Totals(vec![
            CategoryTotal {
                category: "Food".into(),
                amount: 70.0,
            },
            CategoryTotal {
                category: "Travel".into(),
                amount: 15.0,
            },
        ])
    );

    match service.search_by_category("travel").unwrap().value {
        SearchOutcome::Matches(found) => {
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].date, "2024-01-03");
            assert_eq!(found[0].note, "bus");
        }
        SearchOutcome::NoMatches => panic!("expected a Travel match"),
    }

    assert_eq!(
        service.check_budget(amount(100.0)).unwrap().value.status,
        BudgetStatus::WithinBudget
    );
    assert_eq!(
        service.check_budget(amount(80.0)).unwrap().value.status,
        BudgetStatus::Exceeded
    );
    assert_eq!(
        service.check_budget(amount(85.0)).unwrap().value.status,
        BudgetStatus::WithinBudget
    );
}

#[test]
fn search_returns_matches_in_file_order() {
    let dir = TempDir::new().unwrap();
    let service = seeded_service(&dir);
    match service.search_by_category("FOOD").unwrap().value {
        SearchOutcome::Matches(found) => {
            let notes: Vec<&str> = found.iter().map(|e| e.note.as_str()).collect();
            assert_eq!(notes, vec!["lunch", "snack"]);
        }
        SearchOutcome::NoMatches => panic!("expected Food matches"),
    }
}

#[test]
fn total_equals_sum_of_appended_amounts() {
    let dir = TempDir::new().unwrap();
    let service = empty_service(&dir);
    let amounts = [0.1, 0.2, 19.99, 1000.0, 3.333];
    for (idx, value) in amounts.iter().enumerate() {
        service
            .add(&format!("2024-02-{:02}", idx + 1), amount(*value), "Misc", "")
            .unwrap();
    }
    let expected: f64 = amounts.iter().sum();
    let total = service.total().unwrap().value;
    assert!((total.total - expected).abs() < 1e-9);
    assert_eq!(total.records, amounts.len());
}

#[test]
fn category_sums_partition_the_total_of_well_formed_rows() {
    let dir = TempDir::new().unwrap();
    let service = seeded_service(&dir);
    let mut contents = fs::read_to_string(service.store().path()).unwrap();
    contents.push_str("2024-01-04,9.5\n2024-01-05,oops,Food,bad\n2024-01-06,4.5,Gifts,card\n");
    fs::write(service.store().path(), contents).unwrap();

    let summary = service.summarize_by_category().unwrap();
    let total = service.total().unwrap();
    assert!((summary.value.grand_total() - total.value.total).abs() < 1e-9);
    assert!((total.value.total - 89.5).abs() < 1e-9);
    assert_eq!(summary.skipped.len(), 2);
    assert_eq!(total.skipped.len(), 2);
}

#[test]
fn every_read_path_skips_malformed_rows_alike() {
    let dir = TempDir::new().unwrap();
    let service = empty_service(&dir);
    fs::write(
        service.store().path(),
        "2024-01-01,10,Food,ok\n2024-01-02,5,Food,bread, milk\n",
    )
    .unwrap();

    let listed = service.list().unwrap();
    assert_eq!(listed.value.len(), 1);
    assert_eq!(listed.skipped[0].line_number, 2);
    assert_eq!(listed.skipped[0].reason, RecordError::FieldCount { found: 5 });

    assert_eq!(service.total().unwrap().skipped.len(), 1);
    assert_eq!(service.summarize_by_category().unwrap().skipped.len(), 1);
    assert_eq!(service.search_by_category("food").unwrap().skipped.len(), 1);
    assert_eq!(service.check_budget(amount(1.0)).unwrap().skipped.len(), 1);
}

#[test]
fn add_refuses_fields_with_the_delimiter() {
    let dir = TempDir::new().unwrap();
    let service = empty_service(&dir);
    let err = service
        .add("2024-01-01", amount(3.0), "Food", "bread, milk")
        .unwrap_err();
    assert!(matches!(err, ExpenseError::InvalidField { field: "note", .. }));
    assert!(service.store().is_empty().unwrap());
}
