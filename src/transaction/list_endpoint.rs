//! Defines the endpoint for listing all transactions.

use axum::{Json, extract::State};

use crate::{
    Error,
    transaction::{Transaction, state::TransactionState, store::list_transactions},
};

/// A route handler that responds with every stored transaction as a JSON array.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = state.connection()?;

    let transactions = list_transactions(&connection)?;

    Ok(Json(transactions))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use axum::{
        extract::{FromRef, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::{
        Layer,
        layer::{Context, SubscriberExt},
    };

    use crate::{
        AppState, build_router, endpoints,
        transaction::{list_transactions_endpoint, state::TransactionState},
    };

    /// Counts the error level events logged while it is installed.
    #[derive(Clone, Default)]
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn get_broken_state() -> AppState {
        let state = get_test_state();
        state
            .db_connection
            .lock()
            .unwrap()
            .execute("DROP TABLE transactions", ())
            .unwrap();
        state
    }

    fn get_test_state() -> AppState {
        AppState::new(Connection::open_in_memory().unwrap()).unwrap()
    }

    fn get_test_server(state: AppState) -> TestServer {
        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn empty_store_returns_empty_array() {
        let server = get_test_server(get_test_state());

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn returns_transactions_in_insertion_order() {
        let server = get_test_server(get_test_state());
        for description in ["first", "second", "third"] {
            server
                .post(endpoints::TRANSACTIONS_API)
                .json(&json!({
                    "description": description,
                    "amount": "1.00",
                    "type": "EXPENSE",
                    "taxCategory": "NONE",
                    "date": "2026-02-08",
                }))
                .await
                .assert_status_ok();
        }

        let transactions = server.get(endpoints::TRANSACTIONS_API).await.json::<Value>();

        let descriptions: Vec<_> = transactions
            .as_array()
            .unwrap()
            .iter()
            .map(|transaction| transaction["description"].as_str().unwrap())
            .collect();
        assert_eq!(descriptions, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn store_failure_is_internal_server_error() {
        let server = get_test_server(get_broken_state());

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": "Internal server error" }));
    }

    #[test]
    fn store_failure_is_logged_once() {
        let state = TransactionState::from_ref(&get_broken_state());
        let errors = ErrorCounter::default();
        let subscriber = tracing_subscriber::registry().with(errors.clone());
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let response = tracing::subscriber::with_default(subscriber, || {
            runtime.block_on(async {
                list_transactions_endpoint(State(state))
                    .await
                    .into_response()
            })
        });

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(errors.0.load(Ordering::SeqCst), 1);
    }
}
