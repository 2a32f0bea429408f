use chrono::NaiveDate;

use crate::domain::{
    aggregate_by_category, budget_status, build_series, compare_periods, entries_in_interval,
    investment_roi, resolve_period, savings_rate, sum_totals, Cents, Entry, EntryKind, Interval,
    PeriodComparison, PeriodFilter,
};

use super::{BreakdownReport, DashboardSummary, EngineError, TrendReport};

/// Analytics over one read-only snapshot of the ledger.
///
/// This is the primary interface for any presentation context (dashboard,
/// report export, comparison widget). It borrows the snapshot for the
/// duration of the calls and recomputes every result from scratch: nothing is
/// cached, so a fresh snapshot can never serve stale aggregates. All methods
/// are pure given their inputs; "now" is always the caller's `reference`
/// date, never a clock read.
pub struct LedgerAnalytics<'a> {
    entries: &'a [Entry],
}

impl<'a> LedgerAnalytics<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Self { entries }
    }

    /// Category breakdown for one entry kind within the resolved window.
    pub fn breakdown(
        &self,
        kind: EntryKind,
        filter: PeriodFilter,
        reference: NaiveDate,
    ) -> Result<BreakdownReport, EngineError> {
        let interval = resolve_period(filter, reference)?;
        Ok(self.breakdown_in(kind, &interval))
    }

    /// Breakdown against an already-resolved interval.
    pub fn breakdown_in(&self, kind: EntryKind, interval: &Interval) -> BreakdownReport {
        let selected = entries_in_interval(self.entries, interval);
        let rows = aggregate_by_category(&selected, kind);
        let total_cents = rows.iter().map(|row| row.amount_cents).sum();

        BreakdownReport {
            interval: *interval,
            kind,
            rows,
            total_cents,
        }
    }

    /// Cumulative balance curve for the resolved window.
    pub fn trend(
        &self,
        filter: PeriodFilter,
        reference: NaiveDate,
    ) -> Result<TrendReport, EngineError> {
        let interval = resolve_period(filter, reference)?;
        let selected = entries_in_interval(self.entries, &interval);

        Ok(TrendReport {
            interval,
            points: build_series(&selected),
        })
    }

    /// Compare two already-resolved windows. Callers supply disjoint,
    /// equal-length windows with `previous` first; see
    /// [`crate::domain::compare_periods`].
    pub fn compare(&self, current: &Interval, previous: &Interval) -> PeriodComparison {
        compare_periods(self.entries, current, previous)
    }

    /// Compare the resolved window against its immediately preceding window
    /// of equal length. `None` for the all-time filter, which has nothing to
    /// precede it.
    pub fn compare_with_preceding(
        &self,
        filter: PeriodFilter,
        reference: NaiveDate,
    ) -> Result<Option<PeriodComparison>, EngineError> {
        let current = resolve_period(filter, reference)?;
        Ok(current
            .preceding()
            .map(|previous| self.compare(&current, &previous)))
    }

    /// One-call summary for a dashboard screen: totals, derived ratios,
    /// expense breakdown and balance curve for the resolved window.
    /// `portfolio_value` is the externally-priced current value of the
    /// portfolio, used for ROI when supplied.
    pub fn dashboard(
        &self,
        filter: PeriodFilter,
        reference: NaiveDate,
        portfolio_value: Option<Cents>,
    ) -> Result<DashboardSummary, EngineError> {
        let interval = resolve_period(filter, reference)?;
        let selected = entries_in_interval(self.entries, &interval);

        let totals = sum_totals(&selected);
        let expense_breakdown = aggregate_by_category(&selected, EntryKind::Expense);
        let series = build_series(&selected);

        Ok(DashboardSummary {
            interval,
            net_cash_flow_cents: totals.net_cash_flow(),
            savings_rate: savings_rate(totals.income, totals.expenses),
            budget_status: budget_status(totals.income, totals.expenses),
            investment_roi: portfolio_value
                .map(|value| investment_roi(totals.investments, value)),
            totals,
            expense_breakdown,
            series,
        })
    }
}
