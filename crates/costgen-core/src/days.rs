//! Day bucketing.
//!
//! A requested date range is split into one [`DayInterval`] per calendar
//! day. Intervals are half-open (`[start, end)`), in UTC, and contiguous:
//! each interval's `end` is the next interval's `start`.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// Error type for date range construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// The start date is after the end date
    #[error("Start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },

    /// The day after the end date is not representable, so the last
    /// interval would have no end
    #[error("End date {end} is past the last supported date")]
    OutOfBounds { end: NaiveDate },
}

/// Inclusive range of calendar dates a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a new range. Fails if `start > end` or if `end` is
    /// `NaiveDate::MAX`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        if DayInterval::checked_for_date(end).is_none() {
            return Err(RangeError::OutOfBounds { end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day. `NaiveDate::MAX` yields no
    /// intervals; use [`DateRange::new`] to have it rejected.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days in the range, both ends included.
    pub fn num_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Day intervals for this range. Recomputed on every call.
    pub fn days(&self) -> Vec<DayInterval> {
        create_days_list(self.start, self.end)
    }
}

/// One calendar day's `[start, end)` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayInterval {
    /// Midnight UTC at the beginning of the day
    pub start: DateTime<Utc>,
    /// Midnight UTC at the beginning of the following day
    pub end: DateTime<Utc>,
}

impl DayInterval {
    /// The interval covering `date`.
    ///
    /// # Panics
    ///
    /// For `NaiveDate::MAX`, whose following midnight does not exist.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::checked_for_date(date)
            .unwrap_or_else(|| panic!("no day interval for {date}: next midnight out of range"))
    }

    /// The interval covering `date`, or `None` for `NaiveDate::MAX`.
    pub fn checked_for_date(date: NaiveDate) -> Option<Self> {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        let end = start.checked_add_signed(Duration::days(1))?;
        Some(Self { start, end })
    }

    /// Calendar date of this interval.
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Whether `instant` falls inside the half-open window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Split `[start_date, end_date]` into per-day intervals.
///
/// Returns one interval per calendar day, both ends included, in
/// increasing order. A single-day range yields exactly one interval; an
/// inverted range yields none (use [`DateRange::new`] to reject it).
/// Stops before `NaiveDate::MAX`, the one date without a following midnight.
pub fn create_days_list(start_date: NaiveDate, end_date: NaiveDate) -> Vec<DayInterval> {
    start_date
        .iter_days()
        .take_while(|day| *day <= end_date)
        .map_while(DayInterval::checked_for_date)
        .collect()
}
