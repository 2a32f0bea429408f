// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use fiscus::domain::{Cents, Entry, EntryKind};

/// Helper to parse a date string into NaiveDate
pub fn date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

pub fn entry(kind: EntryKind, cents: Cents, date_str: &str) -> Entry {
    Entry::new(kind, cents, date(date_str))
}

pub fn categorized(kind: EntryKind, cents: Cents, date_str: &str, category: &str) -> Entry {
    entry(kind, cents, date_str).with_category(category)
}

/// Test fixture: two months of a fairly ordinary household ledger.
/// January: income 4000, expenses 2950, investments 300.
/// February: income 5000, expenses 3500, investments 300.
pub fn two_month_ledger() -> Vec<Entry> {
    vec![
        // January
        categorized(EntryKind::Income, 4000_00, "2024-01-01", "Salary"),
        categorized(EntryKind::Expense, 1200_00, "2024-01-02", "Rent"),
        categorized(EntryKind::Expense, 450_00, "2024-01-08", "Groceries"),
        categorized(EntryKind::Expense, 450_00, "2024-01-15", "Groceries"),
        categorized(EntryKind::Expense, 650_00, "2024-01-20", "Travel"),
        categorized(EntryKind::Expense, 200_00, "2024-01-25", "Dining"),
        categorized(EntryKind::Investment, 300_00, "2024-01-28", "Index Fund"),
        // February
        categorized(EntryKind::Income, 5000_00, "2024-02-01", "Salary"),
        categorized(EntryKind::Expense, 1200_00, "2024-02-02", "Rent"),
        categorized(EntryKind::Expense, 1100_00, "2024-02-10", "Groceries"),
        categorized(EntryKind::Expense, 900_00, "2024-02-14", "Dining"),
        categorized(EntryKind::Expense, 300_00, "2024-02-20", "Utilities"),
        categorized(EntryKind::Investment, 300_00, "2024-02-28", "Index Fund"),
    ]
}
