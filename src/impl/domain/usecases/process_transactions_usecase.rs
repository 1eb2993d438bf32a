use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::repositories::billing_records_repository_impl::BillingRecordsRepositoryImpl,
    domain::{
        logic::{
            transaction_generator::TransactionGenerator,
            transaction_reversal::reconcile_with_previous,
        },
        repositories::billing_records_repository::BillingRecordsRepository,
    },
    entities::{BillingConfig, BillingContext, BillingRecords, NewTransaction},
};

#[async_trait]
pub trait ProcessTransactionsUsecase: Send + Sync {
    async fn from_string(
        &self,
        charge_references_csv: &str,
        previous_transactions_json: &str,
        context: &BillingContext,
    ) -> Result<Vec<NewTransaction>, ServerError>;

    async fn from_file<P>(
        &self,
        charge_references_csv: P,
        previous_transactions_json: P,
        context: &BillingContext,
    ) -> Result<Vec<NewTransaction>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ProcessTransactionsUsecaseImpl<
    R1 = BillingRecordsRepositoryImpl, // Default.
> where
    R1: BillingRecordsRepository,
{
    records_repository: R1,
    config: BillingConfig,
}

#[async_trait]
impl<R1> ProcessTransactionsUsecase for ProcessTransactionsUsecaseImpl<R1>
where
    R1: BillingRecordsRepository,
{
    async fn from_string(
        &self,
        charge_references_csv: &str,
        previous_transactions_json: &str,
        context: &BillingContext,
    ) -> Result<Vec<NewTransaction>, ServerError> {
        let records = self
            .records_repository
            .from_string(charge_references_csv, previous_transactions_json)?;
        self.process(records, context)
    }

    async fn from_file<P>(
        &self,
        charge_references_csv: P,
        previous_transactions_json: P,
        context: &BillingContext,
    ) -> Result<Vec<NewTransaction>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let records = self
            .records_repository
            .from_file(charge_references_csv, previous_transactions_json)
            .await?;
        self.process(records, context)
    }
}

impl<R1: BillingRecordsRepository> ProcessTransactionsUsecaseImpl<R1> {
    fn process(
        &self,
        records: BillingRecords,
        context: &BillingContext,
    ) -> Result<Vec<NewTransaction>, ServerError> {
        let BillingRecords {
            charge_references,
            previous_transactions,
        } = records;

        let calculated = TransactionGenerator::new(&self.config)
            .generate_for_context(&charge_references, context)?;

        info!(
            billing_invoice_licence_id = %context.billing_invoice_licence_id,
            billing_period = %context.billing_period,
            calculated = calculated.len(),
            previous = previous_transactions.len(),
            "processing billing transactions"
        );
        Ok(reconcile_with_previous(
            calculated,
            previous_transactions,
            context.billing_invoice_licence_id,
        ))
    }
}

impl ProcessTransactionsUsecaseImpl {
    pub(crate) fn new(config: BillingConfig) -> Self {
        ProcessTransactionsUsecaseImpl {
            records_repository: BillingRecordsRepositoryImpl::new(),
            config,
        }
    }
}
