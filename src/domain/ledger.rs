use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Cents, Entry, EntryKind, Interval};

/// Select the entries whose date falls inside `interval`, preserving order.
/// The all-time interval borrows the input as-is; bounded intervals allocate
/// exactly one output collection. The input is never mutated.
pub fn entries_in_interval<'a>(entries: &'a [Entry], interval: &Interval) -> Cow<'a, [Entry]> {
    match interval {
        Interval::AllTime => Cow::Borrowed(entries),
        Interval::Bounded { .. } => Cow::Owned(
            entries
                .iter()
                .filter(|entry| interval.contains(entry.date))
                .cloned()
                .collect(),
        ),
    }
}

/// Iterate over entries, dropping corrupt records instead of aborting the
/// whole computation. One bad row must not blank a dashboard; the skip is
/// reported through tracing so the caller's observability layer sees it.
pub fn well_formed(entries: &[Entry]) -> impl Iterator<Item = &Entry> {
    entries.iter().filter(|entry| {
        if entry.is_well_formed() {
            true
        } else {
            warn!(
                id = %entry.id,
                amount_cents = entry.amount_cents,
                "skipping malformed ledger entry"
            );
            false
        }
    })
}

/// Per-kind sums over a set of entries, in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub income: Cents,
    pub expenses: Cents,
    pub investments: Cents,
}

impl Totals {
    pub fn net_cash_flow(&self) -> Cents {
        self.income - self.expenses
    }

    /// Component-wise difference, used for period-over-period deltas.
    pub fn delta(&self, previous: &Totals) -> Totals {
        Totals {
            income: self.income - previous.income,
            expenses: self.expenses - previous.expenses,
            investments: self.investments - previous.investments,
        }
    }
}

/// Sum income, expenses and investment contributions over `entries`.
pub fn sum_totals(entries: &[Entry]) -> Totals {
    well_formed(entries).fold(Totals::default(), |mut totals, entry| {
        match entry.kind {
            EntryKind::Income => totals.income += entry.amount_cents,
            EntryKind::Expense => totals.expenses += entry.amount_cents,
            EntryKind::Investment => totals.investments += entry.amount_cents,
        }
        totals
    })
}
