use crate::entities::{ChargeReference, PersistedTransaction};

// Loaded inputs.
// ---

pub struct BillingRecords {
    pub charge_references: Vec<ChargeReference>,
    pub previous_transactions: Vec<PersistedTransaction>,
}
