use chrono::NaiveDate;

use super::abstraction_period::AbstractionPeriod;

#[derive(Debug, Clone)]
pub struct ChargeElement {
    pub description: String,
    pub abstraction_period: AbstractionPeriod,
}

#[derive(Debug, Clone)]
pub struct ChargeReference {
    pub id: String,
    pub charge_category_code: String,
    pub charge_category_description: String,
    pub description: String,
    /// Authorised annual volume in megalitres.
    pub volume: f64,
    pub charge_elements: Vec<ChargeElement>,
}

/// Dates on which a licence stopped being chargeable. Any of them cuts the
/// charge period short.
#[derive(Debug, Clone, Default)]
pub struct LicenceEndDates {
    pub expired_date: Option<NaiveDate>,
    pub lapsed_date: Option<NaiveDate>,
    pub revoked_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct ChargeVersion {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub licence: LicenceEndDates,
}

// --

impl LicenceEndDates {
    /// Earliest of the set end dates, if any.
    pub fn earliest(&self) -> Option<NaiveDate> {
        [self.expired_date, self.lapsed_date, self.revoked_date]
            .into_iter()
            .flatten()
            .min()
    }
}
