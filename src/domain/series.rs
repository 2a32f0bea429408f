use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{well_formed, Cents, Entry};

/// Running balance after all entries up to and including `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub balance_cents: Cents,
}

/// Replay entries in chronological order and emit the running balance, one
/// point per distinct date. Income adds to the balance; expenses and
/// investment contributions subtract from it. Multiple entries on the same
/// date collapse into that date's final balance.
///
/// The builder never filters: callers apply the ledger filter first, so the
/// same replay serves "this month" and "all time" without branching here.
pub fn build_series(entries: &[Entry]) -> Vec<CumulativePoint> {
    let mut ordered: Vec<&Entry> = well_formed(entries).collect();
    // Stable: same-date entries keep their original relative order
    ordered.sort_by_key(|entry| entry.date);

    let mut points: Vec<CumulativePoint> = Vec::new();
    let mut balance: Cents = 0;

    for entry in ordered {
        balance += entry.signed_cents();
        match points.last_mut() {
            Some(point) if point.date == entry.date => point.balance_cents = balance,
            _ => points.push(CumulativePoint {
                date: entry.date,
                balance_cents: balance,
            }),
        }
    }

    points
}
