use super::{
    billing_transaction::BillingInvoiceLicenceId, charge_reference::ChargeVersion,
    date_range::DateRange,
};

/// Everything about the licence being billed that does not come from the
/// charge reference sheet.
#[derive(Debug, Clone)]
pub struct BillingContext {
    pub billing_invoice_licence_id: BillingInvoiceLicenceId,
    pub billing_period: DateRange,
    pub charge_version: ChargeVersion,
    pub is_new_licence: bool,
    pub is_water_undertaker: bool,
}
