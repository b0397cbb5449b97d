use chrono::NaiveDate;
use tracing::warn;

use crate::error::CalendarError;

/// Length of the tracking cycle in days.
pub const CYCLE_LENGTH: i64 = 28;

/// 1-indexed position within the 28-day cycle.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CycleDay(u8);

impl CycleDay {
    /// Build a cycle day from a raw day count since the cycle start.
    ///
    /// Day 0 (the start date itself) maps to day 1; day 28 wraps back to 1.
    /// Negative counts clamp to day 1, since a start date in the future is a
    /// configuration problem rather than a computable position.
    pub fn from_elapsed_days(elapsed: i64) -> Self {
        if elapsed < 0 {
            warn!(elapsed, "cycle start date lies in the future, clamping to day 1");
            return Self(1);
        }
        Self((elapsed.rem_euclid(CYCLE_LENGTH) + 1) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based offset from the start of the current cycle.
    pub fn offset(self) -> i64 {
        i64::from(self.0) - 1
    }
}

impl std::fmt::Display for CycleDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, CYCLE_LENGTH)
    }
}

/// Compute the cycle day for `on`, anchored at `start`.
///
/// The canonical convention: whole elapsed calendar days, modulo 28, plus
/// one. The start date itself is day 1 and elapsed day 28 wraps back to 1.
pub fn cycle_day(start: NaiveDate, on: NaiveDate) -> CycleDay {
    let elapsed = on.signed_duration_since(start).num_days();
    CycleDay::from_elapsed_days(elapsed)
}

/// Parse an ISO calendar date string (`YYYY-MM-DD`).
///
/// Unparsable input is a hard error; a bad stored date must not be silently
/// read as "day 1 today".
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, CalendarError> {
    input
        .trim()
        .parse::<NaiveDate>()
        .map_err(|source| CalendarError::InvalidDate {
            input: input.to_string(),
            source,
        })
}

/// A subscriber's cycle configuration: the chosen start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub start_date: NaiveDate,
}

impl Profile {
    pub fn new(start_date: NaiveDate) -> Self {
        Self { start_date }
    }

    /// Parse a profile from an ISO calendar date string (`YYYY-MM-DD`).
    pub fn from_iso(input: &str) -> Result<Self, CalendarError> {
        Ok(Self {
            start_date: parse_iso_date(input)?,
        })
    }

    /// Cycle day for the given date under this profile.
    pub fn cycle_day_on(&self, on: NaiveDate) -> CycleDay {
        cycle_day(self.start_date, on)
    }

    /// First date of the cycle containing `on`.
    ///
    /// For a future-dated start this is the start date itself, matching the
    /// day-1 clamp.
    pub fn cycle_start_on(&self, on: NaiveDate) -> NaiveDate {
        let elapsed = on.signed_duration_since(self.start_date).num_days();
        if elapsed < 0 {
            return self.start_date;
        }
        on - chrono::Duration::days(elapsed.rem_euclid(CYCLE_LENGTH))
    }
}
