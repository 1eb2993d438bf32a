use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::persisted_transaction_model::PersistedTransactionModel,
    entities::PersistedTransaction,
    errors::{InvalidJson, ReadError},
};

#[async_trait]
pub(crate) trait PreviousTransactionsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<PersistedTransaction>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<PersistedTransaction>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct PreviousTransactionsJsonDatasourceImpl;

impl PreviousTransactionsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PreviousTransactionsJsonDatasource for PreviousTransactionsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<PersistedTransaction>, ServerError> {
        let rows: Vec<PersistedTransactionModel> = serde_json::from_str(s)
            .map_err(|e| InvalidJson::with_debug("PreviousTransactions", &e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<PersistedTransaction>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(
            &tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ReadError::with_debug(&e))?,
        )
    }
}
