use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::transaction_generator::TransactionGenerator,
        usecases::process_transactions_usecase::{
            ProcessTransactionsUsecase as _, ProcessTransactionsUsecaseImpl,
        },
    },
    entities::{BillingConfig, BillingContext, ChargeReference, NewTransaction},
    presentation::transaction_summary_printer::TransactionSummaryPrinter,
};

pub type Summary = String;

pub struct SupplementaryBillingUtil {
    process_usecase: ProcessTransactionsUsecaseImpl,
    printer: TransactionSummaryPrinter,
    config: BillingConfig,
}

impl SupplementaryBillingUtil {
    pub fn new() -> Self {
        Self::with_config(BillingConfig::default())
    }

    pub fn with_config(config: BillingConfig) -> Self {
        Self {
            process_usecase: ProcessTransactionsUsecaseImpl::new(config.clone()),
            printer: TransactionSummaryPrinter::new(),
            config,
        }
    }

    /// Calculates the transactions for the charge references in
    /// `charge_references_csv` and nets them against the previously billed
    /// transactions in `previous_transactions_json`.
    pub async fn from_string(
        &self,
        charge_references_csv: &str,
        previous_transactions_json: &str,
        context: &BillingContext,
    ) -> Result<(Vec<NewTransaction>, Summary), ServerError> {
        let transactions = self
            .process_usecase
            .from_string(charge_references_csv, previous_transactions_json, context)
            .await?;
        let summary = self.printer.print_summary(&transactions);
        Ok((transactions, summary))
    }

    pub async fn from_file<T>(
        &self,
        charge_references_csv: T,
        previous_transactions_json: T,
        context: &BillingContext,
    ) -> Result<(Vec<NewTransaction>, Summary), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let transactions = self
            .process_usecase
            .from_file(charge_references_csv, previous_transactions_json, context)
            .await?;
        let summary = self.printer.print_summary(&transactions);
        Ok((transactions, summary))
    }

    /// Transactions for a single charge reference, without netting against
    /// previous bills. Empty when the charge version does not apply during the
    /// billing period.
    pub fn generate_transactions(
        &self,
        charge_reference: &ChargeReference,
        context: &BillingContext,
    ) -> Result<Vec<NewTransaction>, ServerError> {
        TransactionGenerator::new(&self.config)
            .generate_for_context(std::slice::from_ref(charge_reference), context)
    }
}

impl Default for SupplementaryBillingUtil {
    fn default() -> Self {
        Self::new()
    }
}
