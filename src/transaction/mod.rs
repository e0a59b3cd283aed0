//! Transaction management for the finance portal.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the documented values of its text fields
//! - Store functions for listing and creating transactions
//! - The REST API handlers for transactions

mod core;
mod create_endpoint;
mod list_endpoint;
mod state;
mod store;

pub use core::{NewTransaction, TaxCategory, Transaction, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use store::{create_transaction, list_transactions};
