use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::InvalidDateRange;

/// Inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
}

// --

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, ServerError> {
        if start_date > end_date {
            return Err(InvalidDateRange::new(&start_date, &end_date));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Touching endpoints count as overlapping.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(self.start_date > other.end_date || other.start_date > self.end_date)
    }

    /// Narrows this range to the part that falls within `reference`. Callers
    /// must check `overlaps` first, otherwise the result is inverted.
    pub(crate) fn clip_to(&self, reference: &DateRange) -> DateRange {
        DateRange {
            start_date: std::cmp::max(self.start_date, reference.start_date),
            end_date: std::cmp::min(self.end_date, reference.end_date),
        }
    }

    /// Number of days covered, counting both endpoints.
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start_date, self.end_date)
    }
}
