use serde::{Deserialize, Serialize};

use super::Cents;

/// Budget-status thresholds, in tenths of income. Spending above 1.1x income
/// is over budget; spending at or below 0.7x income is under. These came out
/// of the dashboards as unexplained policy numbers, so they stay configurable
/// instead of being baked into the classifier.
pub const OVER_BUDGET_TENTHS: i64 = 11;
pub const UNDER_BUDGET_TENTHS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Over,
    On,
    Under,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Over => "over",
            BudgetStatus::On => "on",
            BudgetStatus::Under => "under",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Share of income kept after expenses, as a percentage. 0 when there is no
/// income to save from.
pub fn savings_rate(income: Cents, expenses: Cents) -> f64 {
    if income > 0 {
        100.0 * (income - expenses) as f64 / income as f64
    } else {
        0.0
    }
}

pub fn net_cash_flow(income: Cents, expenses: Cents) -> Cents {
    income - expenses
}

/// Classify spending against income using the default thresholds.
///
/// The boundaries are display-facing and must hold exactly: spending of
/// exactly 1.1x income is `On` (not over), exactly 0.7x income is `Under`.
/// The comparison runs in integer arithmetic so the boundary cases never
/// depend on floating-point rounding of the threshold product.
pub fn budget_status(income: Cents, expenses: Cents) -> BudgetStatus {
    budget_status_with(income, expenses, OVER_BUDGET_TENTHS, UNDER_BUDGET_TENTHS)
}

/// [`budget_status`] with explicit thresholds, in tenths of income.
pub fn budget_status_with(
    income: Cents,
    expenses: Cents,
    over_tenths: i64,
    under_tenths: i64,
) -> BudgetStatus {
    if expenses * 10 > income * over_tenths {
        BudgetStatus::Over
    } else if expenses * 10 <= income * under_tenths {
        BudgetStatus::Under
    } else {
        BudgetStatus::On
    }
}

/// Return on investment as a percentage of the amount invested. 0 when
/// nothing was invested.
pub fn investment_roi(total_invested: Cents, current_value: Cents) -> f64 {
    if total_invested > 0 {
        100.0 * (current_value - total_invested) as f64 / total_invested as f64
    } else {
        0.0
    }
}
