use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        charge_references_csv_datasource::{
            ChargeReferencesCsvDatasource, ChargeReferencesCsvDatasourceImpl,
        },
        previous_transactions_json_datasource::{
            PreviousTransactionsJsonDatasource, PreviousTransactionsJsonDatasourceImpl,
        },
    },
    domain::repositories::billing_records_repository::BillingRecordsRepository,
    entities::BillingRecords,
};

pub(crate) struct BillingRecordsRepositoryImpl<
    DS1 = ChargeReferencesCsvDatasourceImpl, // Default.
    DS2 = PreviousTransactionsJsonDatasourceImpl, // Default.
> where
    DS1: ChargeReferencesCsvDatasource,
    DS2: PreviousTransactionsJsonDatasource,
{
    charge_references_datasource: DS1,
    previous_transactions_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> BillingRecordsRepository for BillingRecordsRepositoryImpl<DS1, DS2>
where
    DS1: ChargeReferencesCsvDatasource,
    DS2: PreviousTransactionsJsonDatasource,
{
    fn from_string(
        &self,
        charge_references_csv: &str,
        previous_transactions_json: &str,
    ) -> Result<BillingRecords, ServerError> {
        Ok(BillingRecords {
            charge_references: self
                .charge_references_datasource
                .from_string(charge_references_csv)?,
            previous_transactions: self
                .previous_transactions_datasource
                .from_string(previous_transactions_json)?,
        })
    }

    async fn from_file<P>(
        &self,
        charge_references_csv: P,
        previous_transactions_json: P,
    ) -> Result<BillingRecords, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        Ok(BillingRecords {
            charge_references: self
                .charge_references_datasource
                .from_file(charge_references_csv)
                .await?,
            previous_transactions: self
                .previous_transactions_datasource
                .from_file(previous_transactions_json)
                .await?,
        })
    }
}

impl BillingRecordsRepositoryImpl {
    pub(crate) fn new() -> Self {
        BillingRecordsRepositoryImpl {
            charge_references_datasource: ChargeReferencesCsvDatasourceImpl::new(),
            previous_transactions_datasource: PreviousTransactionsJsonDatasourceImpl::new(),
        }
    }
}
