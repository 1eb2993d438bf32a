use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    entities::{CalendarDayMonth, LeapDayPolicy},
    errors::DateOutOfRange,
};

/// Places a day/month in the given year. February 29 in a non-leap year is
/// resolved according to `policy`.
pub(crate) fn date_in_year(
    day_month: CalendarDayMonth,
    year: i32,
    policy: LeapDayPolicy,
) -> Result<NaiveDate, ServerError> {
    if let Some(date) = NaiveDate::from_ymd_opt(year, day_month.month(), day_month.day()) {
        return Ok(date);
    }
    let fallback = if day_month.is_leap_day() {
        match policy {
            LeapDayPolicy::ClampToFebruary28 => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::RollToMarch1 => NaiveDate::from_ymd_opt(year, 3, 1),
        }
    } else {
        None
    };
    fallback.ok_or_else(|| {
        DateOutOfRange::new(&format!(
            "day {} of month {} in year {}",
            day_month.day(),
            day_month.month(),
            year
        ))
    })
}

/// Financial years run from 1 April to 31 March.
pub(crate) const FINANCIAL_YEAR_START_MONTH: u32 = 4;
