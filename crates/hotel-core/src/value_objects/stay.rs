//! Stay dates - the half-open `[check_in, check_out)` interval a booking occupies
//!
//! A guest arriving on the day another departs does not conflict with them:
//! the departure date is never part of the stay.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::DomainError;

/// Non-empty range of calendar nights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// Build a stay, rejecting empty or inverted ranges
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidDateRange(
                "check-out date must be after check-in date".to_string(),
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    #[inline]
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    #[inline]
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights (always at least one)
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open overlap: `a1 < b2 && b1 < a2`
    #[inline]
    pub fn overlaps(&self, other: &StayDates) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Whether the stay begins before the given day
    pub fn starts_before(&self, day: NaiveDate) -> bool {
        self.check_in < day
    }
}

impl fmt::Display for StayDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.check_in, self.check_out)
    }
}
