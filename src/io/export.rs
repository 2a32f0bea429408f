use anyhow::Result;
use std::io::Write;

use crate::application::{BreakdownReport, DashboardSummary, TrendReport};
use crate::domain::{format_cents, PeriodComparison};

/// Write breakdown rows as CSV. Amounts are formatted in decimal units and
/// percentages rounded to one decimal, since this output is for people and
/// spreadsheets rather than for the engine itself.
pub fn write_breakdown_csv<W: Write>(report: &BreakdownReport, writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["category", "amount", "percentage"])?;

    let mut count = 0;
    for row in &report.rows {
        csv_writer.write_record([
            row.category.clone(),
            format_cents(row.amount_cents),
            format!("{:.1}", row.display_percentage()),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Write a cumulative balance series as CSV (`date,balance`).
pub fn write_series_csv<W: Write>(report: &TrendReport, writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["date", "balance"])?;

    let mut count = 0;
    for point in &report.points {
        csv_writer.write_record([
            point.date.format("%Y-%m-%d").to_string(),
            format_cents(point.balance_cents),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Write a period comparison as pretty-printed JSON.
pub fn write_comparison_json<W: Write>(
    comparison: &PeriodComparison,
    mut writer: W,
) -> Result<()> {
    let json = serde_json::to_string_pretty(comparison)?;
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a dashboard summary as pretty-printed JSON.
pub fn write_dashboard_json<W: Write>(summary: &DashboardSummary, mut writer: W) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}
