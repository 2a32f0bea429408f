use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type EntryId = Uuid;

/// Fallback category for entries recorded without one.
pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
    Investment,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
            EntryKind::Investment => "investment",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(EntryKind::Income),
            "expense" => Some(EntryKind::Expense),
            "investment" => Some(EntryKind::Investment),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dated, typed, categorized monetary record in the ledger.
/// Entries are immutable facts owned by the ledger store; the engine receives
/// them as read-only snapshots and never mutates or persists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub kind: EntryKind,
    /// Magnitude in cents, never negative; the sign is implied by `kind`.
    pub amount_cents: Cents,
    /// Calendar date of the entry. There is no time-of-day component;
    /// all interval comparisons are date-only.
    pub date: NaiveDate,
    /// Category for grouping. Absent or empty normalizes to "Other".
    pub category: Option<String>,
    pub description: Option<String>,
}

impl Entry {
    pub fn new(kind: EntryKind, amount_cents: Cents, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount_cents,
            date,
            category: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The category used for grouping, falling back to [`DEFAULT_CATEGORY`]
    /// when none was recorded.
    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// Amount signed by kind: income counts positive, expenses and
    /// investment contributions count negative against the balance.
    pub fn signed_cents(&self) -> Cents {
        match self.kind {
            EntryKind::Income => self.amount_cents,
            EntryKind::Expense | EntryKind::Investment => -self.amount_cents,
        }
    }

    /// The ledger store guarantees non-negative amounts, but aggregation is
    /// defensive about corrupt records; see [`crate::domain::well_formed`].
    pub fn is_well_formed(&self) -> bool {
        self.amount_cents >= 0
    }

    /// Strict form of the well-formedness check, for callers that want a
    /// hard failure at the store boundary instead of the skip policy.
    pub fn validate(&self) -> Result<(), MalformedEntryError> {
        if self.amount_cents < 0 {
            return Err(MalformedEntryError {
                id: self.id,
                reason: format!("negative amount: {}", self.amount_cents),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntryError {
    pub id: EntryId,
    pub reason: String,
}

impl std::fmt::Display for MalformedEntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entry {}: {}", self.id, self.reason)
    }
}

impl std::error::Error for MalformedEntryError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_create_entry() {
        let entry = Entry::new(EntryKind::Expense, 4200, date("2024-03-01"))
            .with_category("Groceries")
            .with_description("weekly shop");

        assert_eq!(entry.amount_cents, 4200);
        assert_eq!(entry.category_or_default(), "Groceries");
        assert_eq!(entry.description, Some("weekly shop".to_string()));
    }

    #[test]
    fn test_category_defaults_to_other() {
        let missing = Entry::new(EntryKind::Expense, 100, date("2024-03-01"));
        let empty = Entry::new(EntryKind::Expense, 100, date("2024-03-01")).with_category("");

        assert_eq!(missing.category_or_default(), "Other");
        assert_eq!(empty.category_or_default(), "Other");
    }

    #[test]
    fn test_signed_cents() {
        let d = date("2024-03-01");
        assert_eq!(Entry::new(EntryKind::Income, 5000, d).signed_cents(), 5000);
        assert_eq!(Entry::new(EntryKind::Expense, 5000, d).signed_cents(), -5000);
        assert_eq!(
            Entry::new(EntryKind::Investment, 5000, d).signed_cents(),
            -5000
        );
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let mut entry = Entry::new(EntryKind::Income, 100, date("2024-03-01"));
        assert!(entry.validate().is_ok());

        entry.amount_cents = -1;
        assert!(!entry.is_well_formed());
        let err = entry.validate().unwrap_err();
        assert_eq!(err.id, entry.id);
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [EntryKind::Income, EntryKind::Expense, EntryKind::Investment] {
            assert_eq!(EntryKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(EntryKind::from_str("transfer"), None);
    }
}
