use chrono::Datelike as _;
use fractic_server_error::ServerError;

use crate::entities::{AbstractionPeriod, DateRange, LeapDayPolicy};

use super::utils::date_in_year;

/// Returns the concrete date ranges where the recurring `window` overlaps
/// `reference`, clipped to `reference`.
///
/// Candidates are the window anchored on the reference start year, and the
/// same window one year earlier and one year later. A window whose end
/// day/month falls before its start day/month ends in the following year.
/// At most two candidates can overlap a reference period of up to a year, so
/// the result holds 0 to 2 ranges, ordered previous, current, next.
pub fn resolve_abstraction_periods(
    reference: &DateRange,
    window: &AbstractionPeriod,
    policy: LeapDayPolicy,
) -> Result<Vec<DateRange>, ServerError> {
    let year = reference.start_date.year();
    let candidates = [year - 1, year, year + 1]
        .into_iter()
        .map(|start_year| candidate_period(window, start_year, policy))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(candidates
        .into_iter()
        .filter(|candidate| candidate.overlaps(reference))
        .map(|candidate| candidate.clip_to(reference))
        .collect())
}

fn candidate_period(
    window: &AbstractionPeriod,
    start_year: i32,
    policy: LeapDayPolicy,
) -> Result<DateRange, ServerError> {
    let end_year = if window.is_out_year() {
        start_year + 1
    } else {
        start_year
    };
    Ok(DateRange {
        start_date: date_in_year(window.start, start_year, policy)?,
        end_date: date_in_year(window.end, end_year, policy)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(start, end).unwrap()
    }

    fn fy_2022() -> DateRange {
        range(d(2022, 4, 1), d(2023, 3, 31))
    }

    #[test]
    fn out_year_window_within_financial_year() {
        let window = AbstractionPeriod::new(1, 11, 31, 3).unwrap();
        let result =
            resolve_abstraction_periods(&fy_2022(), &window, LeapDayPolicy::default()).unwrap();
        assert_eq!(result, vec![range(d(2022, 11, 1), d(2023, 3, 31))]);
    }

    #[test]
    fn in_year_window_applies_twice() {
        let window = AbstractionPeriod::new(1, 1, 30, 6).unwrap();
        let result =
            resolve_abstraction_periods(&fy_2022(), &window, LeapDayPolicy::default()).unwrap();
        assert_eq!(
            result,
            vec![
                range(d(2022, 4, 1), d(2022, 6, 30)),
                range(d(2023, 1, 1), d(2023, 3, 31)),
            ]
        );
    }

    #[test]
    fn out_year_window_straddling_reference_start() {
        let window = AbstractionPeriod::new(1, 10, 30, 4).unwrap();
        let result =
            resolve_abstraction_periods(&fy_2022(), &window, LeapDayPolicy::default()).unwrap();
        assert_eq!(
            result,
            vec![
                range(d(2022, 4, 1), d(2022, 4, 30)),
                range(d(2022, 10, 1), d(2023, 3, 31)),
            ]
        );
    }

    #[test]
    fn all_year_window_covers_reference() {
        let window = AbstractionPeriod::new(1, 1, 31, 12).unwrap();
        let result =
            resolve_abstraction_periods(&fy_2022(), &window, LeapDayPolicy::default()).unwrap();
        assert_eq!(
            result,
            vec![
                range(d(2022, 4, 1), d(2022, 12, 31)),
                range(d(2023, 1, 1), d(2023, 3, 31)),
            ]
        );
    }

    #[test]
    fn no_overlap_yields_empty() {
        let window = AbstractionPeriod::new(1, 1, 31, 1).unwrap();
        let reference = range(d(2022, 4, 1), d(2022, 6, 30));
        let result =
            resolve_abstraction_periods(&reference, &window, LeapDayPolicy::default()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn touching_boundary_yields_single_day() {
        let window = AbstractionPeriod::new(1, 1, 1, 4).unwrap();
        let result =
            resolve_abstraction_periods(&fy_2022(), &window, LeapDayPolicy::default()).unwrap();
        assert_eq!(
            result,
            vec![
                range(d(2022, 4, 1), d(2022, 4, 1)),
                range(d(2023, 1, 1), d(2023, 3, 31)),
            ]
        );
    }

    #[test]
    fn resolving_against_clipped_output_is_stable() {
        for window in [
            AbstractionPeriod::new(1, 11, 31, 3).unwrap(),
            AbstractionPeriod::new(1, 1, 30, 6).unwrap(),
        ] {
            let first =
                resolve_abstraction_periods(&fy_2022(), &window, LeapDayPolicy::default())
                    .unwrap();
            assert!(!first.is_empty());
            for narrowed in &first {
                let again =
                    resolve_abstraction_periods(narrowed, &window, LeapDayPolicy::default())
                        .unwrap();
                assert_eq!(again, vec![*narrowed]);
            }
        }
    }

    #[test]
    fn leap_day_window_end_follows_policy() {
        let window = AbstractionPeriod::new(1, 11, 29, 2).unwrap();
        let clamp =
            resolve_abstraction_periods(&fy_2022(), &window, LeapDayPolicy::ClampToFebruary28)
                .unwrap();
        assert_eq!(clamp, vec![range(d(2022, 11, 1), d(2023, 2, 28))]);

        let roll = resolve_abstraction_periods(&fy_2022(), &window, LeapDayPolicy::RollToMarch1)
            .unwrap();
        assert_eq!(roll, vec![range(d(2022, 11, 1), d(2023, 3, 1))]);

        let fy_2023 = range(d(2023, 4, 1), d(2024, 3, 31));
        let leap =
            resolve_abstraction_periods(&fy_2023, &window, LeapDayPolicy::RollToMarch1).unwrap();
        assert_eq!(leap, vec![range(d(2023, 11, 1), d(2024, 2, 29))]);
    }
}
