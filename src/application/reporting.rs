use serde::{Deserialize, Serialize};

use crate::domain::{
    BudgetStatus, CategoryBreakdownRow, Cents, CumulativePoint, EntryKind, Interval, Totals,
};

/// Per-category totals and percentages for one entry kind within an interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownReport {
    pub interval: Interval,
    pub kind: EntryKind,
    pub rows: Vec<CategoryBreakdownRow>,
    pub total_cents: Cents,
}

/// Running-balance curve for the entries inside an interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub interval: Interval,
    pub points: Vec<CumulativePoint>,
}

/// Everything a KPI-tile dashboard needs for one window, computed in a single
/// pass over the snapshot. Plain numbers only; formatting, colors and chart
/// shapes belong to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub interval: Interval,
    pub totals: Totals,
    pub net_cash_flow_cents: Cents,
    pub savings_rate: f64,
    pub budget_status: BudgetStatus,
    /// ROI against a caller-supplied portfolio valuation; `None` when the
    /// caller did not provide one.
    pub investment_roi: Option<f64>,
    pub expense_breakdown: Vec<CategoryBreakdownRow>,
    pub series: Vec<CumulativePoint>,
}
