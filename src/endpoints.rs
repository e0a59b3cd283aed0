//! The API endpoints URIs.

/// The route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";

/// The client UI page with the transaction form and table.
pub const UI_ROOT: &str = "/";
/// The client UI route that the transaction form is submitted to.
pub const UI_TRANSACTIONS: &str = "/transactions";
