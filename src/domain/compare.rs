use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{
    aggregate_by_category, entries_in_interval, sum_totals, Cents, Entry, EntryKind, Interval,
    Totals,
};

/// Relative change per metric, `100 * delta / previous`; 0 where the previous
/// period had no amount to compare against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentDeltas {
    pub income: f64,
    pub expenses: f64,
    pub investments: f64,
}

/// How one expense category moved between the two windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDelta {
    pub category: String,
    pub current_cents: Cents,
    pub change_cents: Cents,
}

/// "What changed" between two adjacent time windows over the same metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub current: Totals,
    pub previous: Totals,
    pub delta: Totals,
    pub percent_delta: PercentDeltas,
    pub biggest_increase: Option<CategoryDelta>,
    pub biggest_decrease: Option<CategoryDelta>,
}

/// Compare the entries falling in `current` against those in `previous`.
///
/// Callers are expected to supply disjoint windows of equal length with
/// `previous` ending where `current` starts (see [`Interval::preceding`]).
/// Mismatched lengths are a caller error and are not validated here; the
/// comparison is still computed, it just stops being meaningful.
pub fn compare_periods(
    entries: &[Entry],
    current: &Interval,
    previous: &Interval,
) -> PeriodComparison {
    let current_set = entries_in_interval(entries, current);
    let previous_set = entries_in_interval(entries, previous);

    let current_totals = sum_totals(&current_set);
    let previous_totals = sum_totals(&previous_set);
    let delta = current_totals.delta(&previous_totals);

    let percent_delta = PercentDeltas {
        income: percent_change(delta.income, previous_totals.income),
        expenses: percent_change(delta.expenses, previous_totals.expenses),
        investments: percent_change(delta.investments, previous_totals.investments),
    };

    let (biggest_increase, biggest_decrease) =
        expense_category_movers(&current_set, &previous_set);

    PeriodComparison {
        current: current_totals,
        previous: previous_totals,
        delta,
        percent_delta,
        biggest_increase,
        biggest_decrease,
    }
}

fn percent_change(delta: Cents, previous: Cents) -> f64 {
    if previous != 0 {
        100.0 * delta as f64 / previous as f64
    } else {
        0.0
    }
}

/// Per-category expense changes over the union of category names, then the
/// single largest increase and largest decrease. Categories absent from one
/// side count as 0 there. Ties go to the category seen first in the
/// current-period aggregation (previous-only categories come after).
fn expense_category_movers(
    current_set: &[Entry],
    previous_set: &[Entry],
) -> (Option<CategoryDelta>, Option<CategoryDelta>) {
    let current_rows = aggregate_by_category(current_set, EntryKind::Expense);
    let previous_rows = aggregate_by_category(previous_set, EntryKind::Expense);

    let previous_by_category: HashMap<&str, Cents> = previous_rows
        .iter()
        .map(|row| (row.category.as_str(), row.amount_cents))
        .collect();

    let mut changes: Vec<CategoryDelta> = Vec::new();
    for row in &current_rows {
        let previous_amount = previous_by_category
            .get(row.category.as_str())
            .copied()
            .unwrap_or(0);
        changes.push(CategoryDelta {
            category: row.category.clone(),
            current_cents: row.amount_cents,
            change_cents: row.amount_cents - previous_amount,
        });
    }
    for row in &previous_rows {
        if !current_rows.iter().any(|c| c.category == row.category) {
            changes.push(CategoryDelta {
                category: row.category.clone(),
                current_cents: 0,
                change_cents: -row.amount_cents,
            });
        }
    }

    let mut increase: Option<&CategoryDelta> = None;
    let mut decrease: Option<&CategoryDelta> = None;
    for change in &changes {
        // Strict comparisons keep the earliest candidate on ties
        if change.change_cents > 0 && increase.is_none_or(|best| change.change_cents > best.change_cents) {
            increase = Some(change);
        }
        if change.change_cents < 0 && decrease.is_none_or(|best| change.change_cents < best.change_cents) {
            decrease = Some(change);
        }
    }

    (increase.cloned(), decrease.cloned())
}
