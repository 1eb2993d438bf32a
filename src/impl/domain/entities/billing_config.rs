use fractic_server_error::ServerError;

use crate::errors::InvalidRon;

/// How a February 29 day/month is placed in a year that has no such day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum LeapDayPolicy {
    /// Use February 28 (the behaviour of calendar "add one year").
    #[default]
    ClampToFebruary28,
    /// Use March 1.
    RollToMarch1,
}

#[derive(Debug, Clone, serde_derive::Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    pub leap_day_policy: LeapDayPolicy,
    /// Emit compensation transactions for licensees that are not water
    /// undertakers.
    pub compensation_charges: bool,
}

// --

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            leap_day_policy: LeapDayPolicy::default(),
            compensation_charges: true,
        }
    }
}

impl BillingConfig {
    /// Parses a config written in RON, e.g.
    /// `(leap_day_policy: RollToMarch1, compensation_charges: false)`.
    /// Omitted fields take their default value.
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("BillingConfig", &e))
    }
}
