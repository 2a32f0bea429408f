mod common;

use std::fs::File;
use std::io::Read;

use anyhow::Result;
use common::{categorized, date, two_month_ledger};
use fiscus::domain::{EntryKind, PeriodFilter};
use fiscus::io::export::{write_breakdown_csv, write_dashboard_json, write_series_csv};
use fiscus::io::import::{read_entries_csv, read_entries_json};
use fiscus::LedgerAnalytics;

#[test]
fn csv_snapshot_roundtrip() -> Result<()> {
    let csv = "\
date,type,amount,category,description
2024-01-05,income,4000.00,Salary,January pay
2024-01-10,expense,42.50,Groceries,
2024-01-12,investment,300,Index Fund,monthly buy
";

    let snapshot = read_entries_csv(csv.as_bytes())?;

    assert!(snapshot.errors.is_empty());
    assert_eq!(snapshot.entries.len(), 3);
    assert_eq!(snapshot.entries[0].kind, EntryKind::Income);
    assert_eq!(snapshot.entries[0].amount_cents, 4000_00);
    assert_eq!(snapshot.entries[1].amount_cents, 42_50);
    assert_eq!(snapshot.entries[1].description, None);
    assert_eq!(snapshot.entries[2].category.as_deref(), Some("Index Fund"));
    assert_eq!(snapshot.entries[2].date, date("2024-01-12"));
    Ok(())
}

#[test]
fn bad_csv_rows_are_skipped_with_line_numbers() -> Result<()> {
    let csv = "\
date,type,amount,category,description
2024-01-05,income,4000.00,Salary,
not-a-date,income,10.00,,
2024-01-07,transfer,10.00,,
2024-01-08,expense,-5.00,,
2024-01-09,expense,oops,,
2024-01-10,expense,20.00,Food,
";

    let snapshot = read_entries_csv(csv.as_bytes())?;

    assert_eq!(snapshot.entries.len(), 2);
    assert_eq!(snapshot.errors.len(), 4);
    assert_eq!(snapshot.errors[0].line, 3);
    assert_eq!(snapshot.errors[0].field.as_deref(), Some("date"));
    assert_eq!(snapshot.errors[1].field.as_deref(), Some("type"));
    assert_eq!(snapshot.errors[2].field.as_deref(), Some("amount"));
    assert_eq!(snapshot.errors[3].field.as_deref(), Some("amount"));
    Ok(())
}

#[test]
fn json_snapshot_roundtrip() -> Result<()> {
    let entries = two_month_ledger();
    let json = serde_json::to_vec(&entries)?;

    let decoded = read_entries_json(json.as_slice())?;
    assert_eq!(decoded, entries);
    Ok(())
}

#[test]
fn breakdown_export_rounds_for_display() -> Result<()> {
    let entries = vec![
        categorized(EntryKind::Expense, 30_00, "2024-01-05", "Food"),
        categorized(EntryKind::Expense, 70_00, "2024-01-06", "Rent"),
    ];
    let analytics = LedgerAnalytics::new(&entries);
    let report = analytics.breakdown(EntryKind::Expense, PeriodFilter::All, date("2024-06-01"))?;

    let mut buffer = Vec::new();
    let rows = write_breakdown_csv(&report, &mut buffer)?;

    assert_eq!(rows, 2);
    let text = String::from_utf8(buffer)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "category,amount,percentage");
    assert_eq!(lines[1], "Rent,70.00,70.0");
    assert_eq!(lines[2], "Food,30.00,30.0");
    Ok(())
}

#[test]
fn series_export_writes_one_row_per_point() -> Result<()> {
    let entries = two_month_ledger();
    let analytics = LedgerAnalytics::new(&entries);
    let report = analytics.trend(PeriodFilter::Month, date("2024-01-15"))?;

    let mut buffer = Vec::new();
    let rows = write_series_csv(&report, &mut buffer)?;

    assert_eq!(rows, report.points.len());
    let text = String::from_utf8(buffer)?;
    assert!(text.starts_with("date,balance\n"));
    assert!(text.contains("2024-01-01,4000.00"));
    Ok(())
}

#[test]
fn dashboard_json_export_to_file() -> Result<()> {
    let entries = two_month_ledger();
    let analytics = LedgerAnalytics::new(&entries);
    let summary = analytics.dashboard(PeriodFilter::Month, date("2024-02-15"), None)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("dashboard.json");
    write_dashboard_json(&summary, File::create(&path)?)?;

    let mut text = String::new();
    File::open(&path)?.read_to_string(&mut text)?;
    let decoded: fiscus::application::DashboardSummary = serde_json::from_str(&text)?;
    assert_eq!(decoded, summary);
    Ok(())
}
