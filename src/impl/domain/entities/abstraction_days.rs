/// Inclusive day counts for a charge reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AbstractionDays {
    /// Days abstraction is authorised within the billing period.
    pub authorised_days: i64,
    /// Days abstraction is authorised within the charge period.
    pub billable_days: i64,
}
