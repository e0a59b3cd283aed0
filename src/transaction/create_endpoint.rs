//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, state::TransactionState, store::create_transaction},
};

/// A route handler for creating a new transaction, responds with the stored transaction.
///
/// Payloads that cannot be parsed as a [NewTransaction] are rejected with
/// [Error::InvalidPayload] before the store is touched. An `id` in the
/// payload is ignored.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Result<Json<Transaction>, Error> {
    let Json(new_transaction) = payload.map_err(|rejection| {
        tracing::debug!("rejected transaction payload: {rejection}");
        Error::InvalidPayload(rejection.body_text())
    })?;

    let connection = state.connection()?;

    let transaction = create_transaction(new_transaction, &connection)?;

    tracing::debug!("created transaction {}", transaction.id);

    Ok(Json(transaction))
}
