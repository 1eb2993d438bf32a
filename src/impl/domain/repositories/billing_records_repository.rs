use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::BillingRecords;

#[async_trait]
pub trait BillingRecordsRepository: Send + Sync {
    fn from_string(
        &self,
        charge_references_csv: &str,
        previous_transactions_json: &str,
    ) -> Result<BillingRecords, ServerError>;

    async fn from_file<P>(
        &self,
        charge_references_csv: P,
        previous_transactions_json: P,
    ) -> Result<BillingRecords, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
