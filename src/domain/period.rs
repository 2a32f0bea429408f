use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// First day of the week for `PeriodFilter::Week`. This is a product policy
/// carried over from the dashboards, not an ISO requirement; keep it as a
/// constant rather than hard-coding it at the call sites.
pub const WEEK_START: Weekday = Weekday::Mon;

/// User-facing period selector, resolved against an explicit reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodFilter {
    /// No time restriction.
    All,
    Day,
    Week,
    Month,
    Year,
    /// Explicit calendar range; `end` is inclusive of its entire day.
    Custom { start: NaiveDate, end: NaiveDate },
}

/// A half-open date range `[start, end)`, or the "all time" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    AllTime,
    Bounded { start: NaiveDate, end: NaiveDate },
}

impl Interval {
    pub fn bounded(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "bounded interval requires start <= end");
        Interval::Bounded { start, end }
    }

    pub fn is_all_time(&self) -> bool {
        matches!(self, Interval::AllTime)
    }

    /// Whether `date` falls inside the interval. Unbounded intervals contain
    /// every date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Interval::AllTime => true,
            Interval::Bounded { start, end } => *start <= date && date < *end,
        }
    }

    /// The adjacent window of equal length ending where this one starts.
    /// This is what the period comparator expects as its "previous" window.
    /// Returns `None` for the all-time interval, which has no predecessor.
    pub fn preceding(&self) -> Option<Interval> {
        match self {
            Interval::AllTime => None,
            Interval::Bounded { start, end } => {
                let length = end.signed_duration_since(*start);
                Some(Interval::Bounded {
                    start: *start - length,
                    end: *start,
                })
            }
        }
    }
}

/// Resolve a period selector against a reference date into a concrete
/// interval. Pure calendar arithmetic; the reference is always supplied by
/// the caller, never read from a clock.
pub fn resolve_period(
    filter: PeriodFilter,
    reference: NaiveDate,
) -> Result<Interval, InvalidRangeError> {
    let interval = match filter {
        PeriodFilter::All => Interval::AllTime,
        PeriodFilter::Day => Interval::Bounded {
            start: reference,
            end: reference + Duration::days(1),
        },
        PeriodFilter::Week => {
            let start = reference - Duration::days(reference.weekday().days_since(WEEK_START) as i64);
            Interval::Bounded {
                start,
                end: start + Duration::days(7),
            }
        }
        PeriodFilter::Month => {
            let start = reference.with_day(1).unwrap();
            // Calendar arithmetic, not 30-day offsets, so February stays honest
            let end = if reference.month() == 12 {
                NaiveDate::from_ymd_opt(reference.year() + 1, 1, 1).unwrap()
            } else {
                NaiveDate::from_ymd_opt(reference.year(), reference.month() + 1, 1).unwrap()
            };
            Interval::Bounded { start, end }
        }
        PeriodFilter::Year => year_interval(reference.year()),
        PeriodFilter::Custom { start, end } => {
            if start > end {
                return Err(InvalidRangeError { start, end });
            }
            // The custom end date is inclusive of its whole day
            Interval::Bounded {
                start,
                end: end + Duration::days(1),
            }
        }
    };

    Ok(interval)
}

/// Variant of the yearly resolution that takes an explicit year instead of
/// deriving it from a reference date.
pub fn year_interval(year: i32) -> Interval {
    Interval::Bounded {
        start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap(),
    }
}

/// Custom range with `start` after `end`. A user-input error: surfaced
/// synchronously, never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl std::fmt::Display for InvalidRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid custom range: start {} is after end {}",
            self.start, self.end
        )
    }
}

impl std::error::Error for InvalidRangeError {}
