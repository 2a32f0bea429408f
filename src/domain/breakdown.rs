use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{round_to_tenth, well_formed, Cents, Entry, EntryKind};

/// One category's share of a type total within some interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdownRow {
    pub category: String,
    pub amount_cents: Cents,
    /// Share of the type total, `100 * amount / total`, kept in full
    /// precision. Use [`Self::display_percentage`] for rendering.
    pub percentage: f64,
}

impl CategoryBreakdownRow {
    /// Percentage rounded to one decimal place for display.
    pub fn display_percentage(&self) -> f64 {
        round_to_tenth(self.percentage)
    }
}

/// Group entries of the given kind by category, sum amounts, and compute each
/// category's share of the kind total.
///
/// Rows come back sorted by descending amount; ties keep the order in which
/// the category was first seen in the input (the sort is stable). An input
/// with no matching entries yields an empty vec, never an error.
pub fn aggregate_by_category(entries: &[Entry], kind: EntryKind) -> Vec<CategoryBreakdownRow> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut sums: Vec<(String, Cents)> = Vec::new();

    for entry in well_formed(entries).filter(|e| e.kind == kind) {
        let category = entry.category_or_default();
        match index.get(category) {
            Some(&slot) => sums[slot].1 += entry.amount_cents,
            None => {
                index.insert(category.to_string(), sums.len());
                sums.push((category.to_string(), entry.amount_cents));
            }
        }
    }

    let total: Cents = sums.iter().map(|(_, amount)| amount).sum();

    let mut rows: Vec<CategoryBreakdownRow> = sums
        .into_iter()
        .map(|(category, amount_cents)| CategoryBreakdownRow {
            category,
            percentage: if total > 0 {
                100.0 * amount_cents as f64 / total as f64
            } else {
                0.0
            },
            amount_cents,
        })
        .collect();

    rows.sort_by(|a, b| b.amount_cents.cmp(&a.amount_cents));
    rows
}
