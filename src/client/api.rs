//! The client side of the transactions REST API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::{NewTransaction, Transaction, endpoints::TRANSACTIONS_API};

/// The errors that may occur when calling the transactions REST API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read,
    /// e.g. the service is unreachable.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service responded with an unsuccessful status code.
    #[error("the service responded with {0}")]
    Status(StatusCode),
}

/// The operations the client UI needs from the record store service.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Get every stored transaction.
    async fn list(&self) -> Result<Vec<Transaction>, ClientError>;

    /// Store `new_transaction` and get it back with its assigned ID.
    async fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, ClientError>;
}

/// Calls the record store service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransactionApi {
    client: Client,
    transactions_url: String,
}

impl HttpTransactionApi {
    /// Create a client for the service at `base_url`, e.g. "http://localhost:8080".
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            transactions_url: format!("{}{TRANSACTIONS_API}", base_url.trim_end_matches('/')),
        }
    }
}

fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(status))
    }
}

#[async_trait]
impl TransactionApi for HttpTransactionApi {
    async fn list(&self) -> Result<Vec<Transaction>, ClientError> {
        let response = self.client.get(&self.transactions_url).send().await?;
        let transactions = check_status(response)?.json().await?;

        Ok(transactions)
    }

    async fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, ClientError> {
        let response = self
            .client
            .post(&self.transactions_url)
            .json(new_transaction)
            .send()
            .await?;
        let transaction = check_status(response)?.json().await?;

        Ok(transaction)
    }
}
