//! Reading and writing transactions in the document store.

use rusqlite::Connection;

use crate::{
    Error,
    db::{Collection, find_all_documents, insert_document},
    transaction::{NewTransaction, Transaction},
};

/// Retrieve every transaction in the store, in the store's native (insertion) order.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidDocument] if a stored document is not a transaction,
/// - or [Error::SqlError] if there is an SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    let transactions = find_all_documents::<NewTransaction>(Collection::Transactions, connection)?
        .into_iter()
        .map(|(id, document)| document.with_id(id))
        .collect();

    Ok(transactions)
}

/// Store a new transaction and return it with the ID assigned by the store.
///
/// Identical payloads are stored as distinct transactions.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let id = insert_document(Collection::Transactions, &new_transaction, connection)?;

    Ok(new_transaction.with_id(id))
}
