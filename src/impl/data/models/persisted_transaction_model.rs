use crate::{
    data::models::iso_date_model::ISODateModel,
    entities::{
        BillingInvoiceLicenceId, BillingTransactionId, ChargeType, PersistedTransaction,
        TransactionStatus,
    },
};

/// Row shape returned by the previous-transactions query. Columns not listed
/// here are ignored.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersistedTransactionModel {
    id: BillingTransactionId,
    billing_invoice_licence_id: BillingInvoiceLicenceId,
    charge_type: ChargeType,
    charge_category_code: String,
    #[serde(default)]
    charge_category_description: String,
    #[serde(default)]
    description: String,
    authorised_days: i64,
    billable_days: i64,
    #[serde(default)]
    volume: f64,
    is_credit: bool,
    #[serde(default)]
    is_new_licence: bool,
    status: TransactionStatus,
    start_date: ISODateModel,
    end_date: ISODateModel,
    #[serde(default)]
    purposes: Vec<serde_json::Value>,
    #[serde(default)]
    invoice_account_id: Option<String>,
    #[serde(default)]
    invoice_account_number: Option<String>,
}

impl From<PersistedTransactionModel> for PersistedTransaction {
    fn from(model: PersistedTransactionModel) -> Self {
        PersistedTransaction {
            id: model.id,
            billing_invoice_licence_id: model.billing_invoice_licence_id,
            charge_type: model.charge_type,
            charge_category_code: model.charge_category_code,
            charge_category_description: model.charge_category_description,
            description: model.description,
            authorised_days: model.authorised_days,
            billable_days: model.billable_days,
            volume: model.volume,
            is_credit: model.is_credit,
            is_new_licence: model.is_new_licence,
            status: model.status,
            start_date: model.start_date.into(),
            end_date: model.end_date.into(),
            purposes: model.purposes,
            invoice_account_id: model.invoice_account_id,
            invoice_account_number: model.invoice_account_number,
        }
    }
}
