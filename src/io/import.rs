use anyhow::Result;
use chrono::NaiveDate;
use std::io::Read;

use crate::domain::{parse_cents, Entry, EntryKind};

/// Error that occurred while reading one snapshot row
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

/// A snapshot read from an external source: the usable entries plus the rows
/// that could not be parsed. Bad rows never abort the whole read.
#[derive(Debug, Clone)]
pub struct SnapshotImport {
    pub entries: Vec<Entry>,
    pub errors: Vec<ImportError>,
}

/// Read a ledger snapshot from CSV with columns
/// `date,type,amount,category,description`. Dates are `YYYY-MM-DD`, amounts
/// are decimal units ("42.50"). Rows that fail to parse are collected into
/// [`SnapshotImport::errors`] with their line numbers and skipped.
pub fn read_entries_csv<R: Read>(reader: R) -> Result<SnapshotImport> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    for (line_num, result) in csv_reader.records().enumerate() {
        let line = line_num + 2; // +2 for header and 0-indexing

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: None,
                    error: format!("CSV parse error: {}", e),
                });
                continue;
            }
        };

        let date_str = record.get(0).unwrap_or("");
        let kind_str = record.get(1).unwrap_or("");
        let amount_str = record.get(2).unwrap_or("");
        let category = record.get(3).filter(|s| !s.is_empty()).map(String::from);
        let description = record.get(4).filter(|s| !s.is_empty()).map(String::from);

        let date = match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
            Ok(d) => d,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: Some("date".to_string()),
                    error: format!("Invalid date: {}", e),
                });
                continue;
            }
        };

        let kind = match EntryKind::from_str(kind_str) {
            Some(k) => k,
            None => {
                errors.push(ImportError {
                    line,
                    field: Some("type".to_string()),
                    error: format!("Unknown entry type: {}", kind_str),
                });
                continue;
            }
        };

        let amount_cents = match parse_cents(amount_str) {
            Ok(a) if a >= 0 => a,
            Ok(a) => {
                errors.push(ImportError {
                    line,
                    field: Some("amount".to_string()),
                    error: format!("Negative amount: {}", a),
                });
                continue;
            }
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: Some("amount".to_string()),
                    error: format!("Invalid amount: {}", e),
                });
                continue;
            }
        };

        let mut entry = Entry::new(kind, amount_cents, date);
        if let Some(category) = category {
            entry = entry.with_category(category);
        }
        if let Some(description) = description {
            entry = entry.with_description(description);
        }
        entries.push(entry);
    }

    Ok(SnapshotImport { entries, errors })
}

/// Read a ledger snapshot from a JSON array of entries.
pub fn read_entries_json<R: Read>(reader: R) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> = serde_json::from_reader(reader)?;
    Ok(entries)
}
