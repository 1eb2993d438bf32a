use fractic_server_error::ServerError;

use crate::errors::InvalidCalendarDayMonth;

/// A day and month without a year. February 29 is accepted; how it maps onto
/// a non-leap year is decided by `LeapDayPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDayMonth {
    // Field order matters for the derived ordering.
    month: u32,
    day: u32,
}

/// Recurring, year-less window during which abstraction is authorised (e.g.
/// 1 November to 31 March).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbstractionPeriod {
    pub start: CalendarDayMonth,
    pub end: CalendarDayMonth,
}

// --

impl CalendarDayMonth {
    pub fn new(day: u32, month: u32) -> Result<Self, ServerError> {
        let max_day = match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 29,
            _ => return Err(InvalidCalendarDayMonth::new(day, month)),
        };
        if day == 0 || day > max_day {
            return Err(InvalidCalendarDayMonth::new(day, month));
        }
        Ok(Self { month, day })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }
}

impl AbstractionPeriod {
    pub fn new(
        start_day: u32,
        start_month: u32,
        end_day: u32,
        end_month: u32,
    ) -> Result<Self, ServerError> {
        Ok(Self {
            start: CalendarDayMonth::new(start_day, start_month)?,
            end: CalendarDayMonth::new(end_day, end_month)?,
        })
    }

    /// Whether the window crosses the year boundary.
    pub fn is_out_year(&self) -> bool {
        self.end < self.start
    }
}
