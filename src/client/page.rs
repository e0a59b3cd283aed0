//! The route handlers and markup for the client UI's transactions page.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
// axum_extra's Form reads a blank amount field as None, axum::Form rejects it.
use axum_extra::extract::Form;
use axum_htmx::HxRequest;
use maud::{Markup, html};
use rust_decimal::Decimal;
use serde::Deserialize;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;

use crate::{
    TaxCategory, Transaction, TransactionType,
    client::{Draft, TransactionApi, TransactionsView},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency,
    },
    not_found::get_404_not_found_page,
    timezone::get_local_date,
};

/// The id of the element that htmx swaps after the form is submitted.
const CONTENT_ID: &str = "transactions-content";

/// The state shared by the client UI's route handlers.
struct UiState<A> {
    view: Mutex<TransactionsView<A>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    local_timezone: String,
}

type SharedUiState<A> = Arc<UiState<A>>;

/// Return a router that serves `view` as the client UI.
///
/// `local_timezone` is used to date a fresh form draft "today".
pub fn build_ui_router<A: TransactionApi + 'static>(
    view: TransactionsView<A>,
    local_timezone: &str,
) -> Router {
    let state = Arc::new(UiState {
        view: Mutex::new(view),
        local_timezone: local_timezone.to_owned(),
    });

    Router::new()
        .route(endpoints::UI_ROOT, get(get_transactions_page::<A>))
        .route(endpoints::UI_TRANSACTIONS, post(submit_transaction::<A>))
        .fallback(get_404_not_found_page)
        .with_state(state)
}

/// The form data for a new transaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftForm {
    description: String,
    /// A blank amount field is read as zero.
    amount: Option<Decimal>,
    #[serde(rename = "type")]
    kind: String,
    tax_category: String,
    date: Date,
}

impl From<DraftForm> for Draft {
    fn from(form: DraftForm) -> Self {
        Self {
            description: form.description,
            amount: form.amount.unwrap_or(Decimal::ZERO),
            kind: form.kind,
            tax_category: form.tax_category,
            date: form.date,
        }
    }
}

fn today(local_timezone: &str) -> Date {
    get_local_date(local_timezone).unwrap_or_else(|| {
        tracing::error!("Invalid timezone {local_timezone}, using UTC");
        OffsetDateTime::now_utc().date()
    })
}

/// Open the page: start a fresh draft and load the transactions.
async fn get_transactions_page<A: TransactionApi>(
    State(state): State<SharedUiState<A>>,
) -> Markup {
    let mut view = state.view.lock().await;

    view.set_draft(Draft::new(today(&state.local_timezone)));
    view.mount().await;

    transactions_page(&view)
}

/// Submit the form, responding with the refreshed content for htmx requests
/// and the full page otherwise.
async fn submit_transaction<A: TransactionApi>(
    State(state): State<SharedUiState<A>>,
    HxRequest(is_htmx_request): HxRequest,
    Form(form): Form<DraftForm>,
) -> Markup {
    let mut view = state.view.lock().await;

    view.set_draft(form.into());
    view.submit().await;

    if is_htmx_request {
        transactions_content(&view)
    } else {
        transactions_page(&view)
    }
}

fn transactions_page<A>(view: &TransactionsView<A>) -> Markup
where
    A: TransactionApi,
{
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Transactions" }

            (transactions_content(view))
        }
    };

    base("Transactions", &content)
}

fn transactions_content<A: TransactionApi>(view: &TransactionsView<A>) -> Markup {
    html! {
        div id=(CONTENT_ID) class="w-full flex flex-col gap-8"
        {
            (draft_form(view.draft()))
            (transactions_table(view.transactions()))
        }
    }
}

fn draft_form(draft: &Draft) -> Markup {
    html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            form
                method="post"
                action=(endpoints::UI_TRANSACTIONS)
                hx-post=(endpoints::UI_TRANSACTIONS)
                hx-target={ "#" (CONTENT_ID) }
                hx-swap="outerHTML"
                class="w-full space-y-4"
            {
                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                    input
                        type="text"
                        name="description"
                        id="description"
                        class=(FORM_TEXT_INPUT_STYLE)
                        value=(draft.description);
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                    input
                        type="number"
                        name="amount"
                        id="amount"
                        step="0.01"
                        class=(FORM_TEXT_INPUT_STYLE)
                        value=(draft.amount);
                }

                div
                {
                    label for="type" class=(FORM_LABEL_STYLE) { "Type" }
                    select name="type" id="type" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for kind in TransactionType::ALL
                        {
                            option value=(kind) selected[draft.kind == kind.as_str()] { (kind) }
                        }
                    }
                }

                div
                {
                    label for="taxCategory" class=(FORM_LABEL_STYLE) { "Tax Category" }
                    select name="taxCategory" id="taxCategory" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in TaxCategory::ALL
                        {
                            option
                                value=(category)
                                selected[draft.tax_category == category.as_str()]
                            {
                                (category)
                            }
                        }
                    }
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                    input
                        type="date"
                        name="date"
                        id="date"
                        class=(FORM_TEXT_INPUT_STYLE)
                        value=(draft.date);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
            }
        }
    }
}

fn transactions_table(transactions: &[Transaction]) -> Markup {
    html! {
        div class="relative overflow-x-auto shadow-md sm:rounded-lg"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Tax Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                    }
                }

                tbody
                {
                    @for transaction in transactions
                    {
                        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.date) }
                            td class=(TABLE_CELL_STYLE) { (transaction.description) }
                            td class=(TABLE_CELL_STYLE) { (transaction.kind) }
                            td class=(TABLE_CELL_STYLE) { (transaction.tax_category) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.amount)) }
                        }
                    }

                    @if transactions.is_empty()
                    {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td colspan="5" class=(TABLE_CELL_STYLE) { "No transactions yet." }
                        }
                    }
                }
            }
        }
    }
}
