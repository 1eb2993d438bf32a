use chrono::Month;

use crate::entities::{AbstractionPeriod, CalendarDayMonth};

impl std::fmt::Display for CalendarDayMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Month is validated to 1-12 on construction.
        let month = u8::try_from(self.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or(std::fmt::Error)?;
        write!(f, "{} {}", self.day(), month.name())
    }
}

impl std::fmt::Display for AbstractionPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
