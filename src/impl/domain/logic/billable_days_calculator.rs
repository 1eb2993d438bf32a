use fractic_server_error::ServerError;

use crate::entities::{AbstractionDays, ChargeReference, DateRange, LeapDayPolicy};

use super::{
    abstraction_period_resolver::resolve_abstraction_periods,
    date_range_consolidator::consolidate_date_ranges,
};

/// Counts the days a charge reference's elements authorise abstraction,
/// against the billing period (authorised) and the charge period (billable).
/// Overlapping element periods are only counted once.
pub fn calculate_abstraction_days(
    charge_period: &DateRange,
    billing_period: &DateRange,
    charge_reference: &ChargeReference,
    policy: LeapDayPolicy,
) -> Result<AbstractionDays, ServerError> {
    let mut authorised_periods = Vec::new();
    let mut billable_periods = Vec::new();
    for element in &charge_reference.charge_elements {
        authorised_periods.extend(resolve_abstraction_periods(
            billing_period,
            &element.abstraction_period,
            policy,
        )?);
        billable_periods.extend(resolve_abstraction_periods(
            charge_period,
            &element.abstraction_period,
            policy,
        )?);
    }

    Ok(AbstractionDays {
        authorised_days: count_days(&authorised_periods, billing_period),
        billable_days: count_days(&billable_periods, charge_period),
    })
}

fn count_days(periods: &[DateRange], reference: &DateRange) -> i64 {
    consolidate_date_ranges(periods)
        .iter()
        .filter(|period| period.overlaps(reference))
        .map(|period| period.clip_to(reference).num_days())
        .sum()
}
