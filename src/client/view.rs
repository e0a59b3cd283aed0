//! The state behind the client UI's list-and-form view.

use rust_decimal::Decimal;
use time::Date;

use crate::{
    NewTransaction, TaxCategory, Transaction, TransactionType, client::TransactionApi,
};

/// The in-progress values of the new transaction form.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    /// A text description of what the transaction is for.
    pub description: String,
    /// The amount of money spent or earned.
    pub amount: Decimal,
    /// Whether the transaction is income or an expense.
    pub kind: String,
    /// How the transaction is treated for tax purposes.
    pub tax_category: String,
    /// When the transaction happened.
    pub date: Date,
}

impl Draft {
    /// An empty expense with no tax category dated `today`.
    pub fn new(today: Date) -> Self {
        Self {
            description: String::new(),
            amount: Decimal::ZERO,
            kind: TransactionType::default().to_string(),
            tax_category: TaxCategory::default().to_string(),
            date: today,
        }
    }

    /// Clear the description and amount, keeping the type, tax category and date.
    fn reset(&mut self) {
        self.description.clear();
        self.amount = Decimal::ZERO;
    }

    fn to_new_transaction(&self) -> NewTransaction {
        NewTransaction {
            description: self.description.clone(),
            amount: self.amount,
            kind: self.kind.clone(),
            tax_category: self.tax_category.clone(),
            date: self.date,
        }
    }
}

/// The last fetched transactions and the new transaction form.
///
/// Request failures are logged and leave the view as it was.
#[derive(Debug)]
pub struct TransactionsView<A> {
    api: A,
    transactions: Vec<Transaction>,
    draft: Draft,
}

impl<A: TransactionApi> TransactionsView<A> {
    /// Create a view with no transactions and a fresh [Draft] dated `today`.
    pub fn new(api: A, today: Date) -> Self {
        Self {
            api,
            transactions: Vec::new(),
            draft: Draft::new(today),
        }
    }

    /// The transactions from the last successful fetch.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The in-progress form values.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Replace the in-progress form values.
    pub fn set_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Load the transactions for a freshly opened view.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Create a transaction from the draft.
    ///
    /// On success the full list is fetched again and the draft's description
    /// and amount are cleared.
    pub async fn submit(&mut self) {
        match self.api.create(&self.draft.to_new_transaction()).await {
            Ok(transaction) => {
                tracing::info!("created transaction {}", transaction.id);
                self.draft.reset();
                self.refresh().await;
            }
            Err(error) => tracing::error!("could not create transaction: {error}"),
        }
    }

    async fn refresh(&mut self) {
        match self.api.list().await {
            Ok(transactions) => self.transactions = transactions,
            Err(error) => tracing::error!("could not fetch transactions: {error}"),
        }
    }
}
