use chrono::NaiveDate;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(transparent)]
pub struct BillingTransactionId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(transparent)]
pub struct BillingInvoiceLicenceId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChargeType {
    Standard,
    Compensation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Candidate,
    ChargeCreated,
    Approved,
    Error,
}

/// A transaction row as read back from a previous bill run. Carries columns
/// joined in by the source query that do not belong to the transaction table.
#[derive(Debug, Clone)]
pub struct PersistedTransaction {
    pub id: BillingTransactionId,
    pub billing_invoice_licence_id: BillingInvoiceLicenceId,
    pub charge_type: ChargeType,
    pub charge_category_code: String,
    pub charge_category_description: String,
    pub description: String,
    pub authorised_days: i64,
    pub billable_days: i64,
    pub volume: f64,
    pub is_credit: bool,
    pub is_new_licence: bool,
    pub status: TransactionStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Array-wrapped by the source query; holds a single element. Reversal
    /// keeps only the first element.
    pub purposes: Vec<serde_json::Value>,
    // Joined from the invoice account.
    pub invoice_account_id: Option<String>,
    pub invoice_account_number: Option<String>,
}

/// A transaction ready to be inserted. Only native transaction columns.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: BillingTransactionId,
    pub billing_invoice_licence_id: BillingInvoiceLicenceId,
    pub charge_type: ChargeType,
    pub charge_category_code: String,
    pub charge_category_description: String,
    pub description: String,
    pub authorised_days: i64,
    pub billable_days: i64,
    pub volume: f64,
    pub is_credit: bool,
    pub is_new_licence: bool,
    pub status: TransactionStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub purposes: serde_json::Value,
}

// --

impl BillingTransactionId {
    /// Fresh random (v4) identifier drawn from OS entropy.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for BillingTransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ChargeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            ChargeType::Standard => "standard",
            ChargeType::Compensation => "compensation",
        })
    }
}

impl std::fmt::Display for BillingInvoiceLicenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NewTransaction {
    /// Two transactions with equal keys and opposite credit flags cancel out.
    pub fn cancellation_key(&self) -> (ChargeType, &str, i64) {
        (
            self.charge_type,
            self.charge_category_code.as_str(),
            self.billable_days,
        )
    }
}
