//! The client UI: a list-and-form page for transactions that talks to the
//! record store service over HTTP.
//!
//! - [TransactionApi] is the seam to the service, [HttpTransactionApi] the
//!   implementation used in production.
//! - [TransactionsView] holds the fetched transactions and the form draft.
//! - [build_ui_router] serves the view as HTML pages.

mod api;
mod page;
mod view;

pub use api::{ClientError, HttpTransactionApi, TransactionApi};
pub use page::build_ui_router;
pub use view::{Draft, TransactionsView};
