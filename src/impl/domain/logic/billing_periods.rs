use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::ServerError;

use crate::{
    entities::{ChargeVersion, DateRange},
    errors::DateOutOfRange,
};

use super::utils::FINANCIAL_YEAR_START_MONTH;

/// Number of financial years a supplementary bill run can reach back, not
/// counting the current one.
const MAX_PREVIOUS_YEARS: i32 = 5;

/// Start of the charging scheme; no earlier years are billed.
fn scheme_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 4, 1).expect("hardcoded scheme start date should be valid")
}

/// Returns the financial year (1 April to 31 March) containing `date`.
pub fn financial_year(date: NaiveDate) -> Result<DateRange, ServerError> {
    let start_year = if date.month() >= FINANCIAL_YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    };
    financial_year_starting(start_year)
}

fn financial_year_starting(start_year: i32) -> Result<DateRange, ServerError> {
    let start_date = NaiveDate::from_ymd_opt(start_year, FINANCIAL_YEAR_START_MONTH, 1);
    let end_date = NaiveDate::from_ymd_opt(start_year + 1, FINANCIAL_YEAR_START_MONTH - 1, 31);
    match (start_date, end_date) {
        (Some(start_date), Some(end_date)) => DateRange::new(start_date, end_date),
        _ => Err(DateOutOfRange::new(&format!(
            "financial year starting {}",
            start_year
        ))),
    }
}

/// Billing periods a supplementary bill run covers as of `today`: the current
/// financial year and up to five before it, none starting before the scheme
/// start. Newest first.
pub fn determine_billing_periods(
    today: NaiveDate,
) -> Result<Vec<DateRange>, ServerError> {
    let current = financial_year(today)?;
    let current_start_year = current.start_date.year();
    (0..=MAX_PREVIOUS_YEARS)
        .map(|years_back| financial_year_starting(current_start_year - years_back))
        .filter(|period| {
            period
                .as_ref()
                .map_or(true, |p| p.start_date >= scheme_start_date())
        })
        .collect()
}

/// The part of `billing_period` during which the charge version applies and
/// the licence is still in force. `None` if there is no such part.
pub fn determine_charge_period(
    charge_version: &ChargeVersion,
    billing_period: &DateRange,
) -> Option<DateRange> {
    let start_date = std::cmp::max(billing_period.start_date, charge_version.start_date);
    let end_date = [
        Some(billing_period.end_date),
        charge_version.end_date,
        charge_version.licence.earliest(),
    ]
    .into_iter()
    .flatten()
    .min()?;

    if start_date > end_date {
        return None;
    }
    Some(DateRange {
        start_date,
        end_date,
    })
}
