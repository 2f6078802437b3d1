//! Defines the endpoint for editing a transaction.

use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    Error,
    alert::Alert,
    table::TableQuery,
    transaction::{TransactionId, TransactionPatch, parse_amount},
};

use super::state::{TransactionState, store_changed_response};

/// The form data for editing a transaction. Blank fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct EditTransactionForm {
    pub date: Option<String>,
    pub category: Option<String>,
    pub vendor: Option<String>,
    /// The amount as typed, see [parse_amount].
    pub amount: Option<String>,
}

impl From<EditTransactionForm> for TransactionPatch {
    fn from(form: EditTransactionForm) -> Self {
        Self {
            date: form.date.map(|date| date.trim().to_owned()),
            category: form.category.map(|category| category.trim().to_lowercase()),
            vendor: form.vendor.map(|vendor| vendor.trim().to_owned()),
            amount: form.amount.as_deref().map(parse_amount),
        }
    }
}

/// A route handler for editing a transaction.
///
/// The table state comes in the query string so the re-rendered table
/// matches what the user was looking at.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Query(query): Query<TableQuery>,
    Form(form): Form<EditTransactionForm>,
) -> Response {
    let table_state = state.table_state(query);

    let monthly_budget = match state.monthly_budget() {
        Ok(budget) => budget,
        Err(error) => return error.into_alert_response(),
    };

    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Could not acquire store lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    match store.update(transaction_id, form.into()) {
        Ok(transaction) => tracing::info!("Updated transaction {transaction:?}"),
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    }

    let alert = Alert::SuccessSimple {
        message: "Transaction updated".to_owned(),
    };

    store_changed_response(
        &store,
        &table_state,
        &state.categories,
        monthly_budget,
        alert,
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{FromRef, Path, Query, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use axum_extra::extract::Form;
    use scraper::Selector;

    use crate::{
        table::TableQuery,
        test_utils::{
            assert_alert_error, assert_alert_success, assert_status_ok, parse_html_fragment,
            test_state,
        },
        transaction::{
            Transaction, TransactionPatch, edit_transaction_endpoint, state::TransactionState,
        },
    };

    use super::EditTransactionForm;

    fn form(amount: Option<&str>, vendor: Option<&str>) -> EditTransactionForm {
        EditTransactionForm {
            date: None,
            category: Some("Work".to_owned()),
            vendor: vendor.map(str::to_owned),
            amount: amount.map(str::to_owned),
        }
    }

    #[test]
    fn form_converts_to_patch() {
        let patch: TransactionPatch = form(Some("-3"), Some(" Deli ")).into();

        assert_eq!(
            patch,
            TransactionPatch {
                date: None,
                category: Some("work".to_owned()),
                vendor: Some("Deli".to_owned()),
                amount: Some(0.0),
            }
        );
    }

    #[tokio::test]
    async fn updates_transaction_in_place() {
        let state = TransactionState::from_ref(&test_state());

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(1),
            Query(TableQuery::default()),
            Form(form(Some("99.5"), None)),
        )
        .await
        .into_response();

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_alert_success(&html, "Transaction updated", None);
        let first_row = html
            .select(&Selector::parse("tbody tr").unwrap())
            .next()
            .and_then(|row| row.value().attr("data-transaction-id"));
        assert_eq!(first_row, Some("1"));

        let store = state.store.lock().unwrap();
        assert_eq!(store.len(), 7);
        assert_eq!(
            store.transactions()[0],
            Transaction {
                id: 1,
                date: "2025-04-02".to_owned(),
                category: "work".to_owned(),
                vendor: "Bakery".to_owned(),
                amount: 99.5,
            }
        );
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let state = TransactionState::from_ref(&test_state());

        let response = edit_transaction_endpoint(
            State(state),
            Path(42),
            Query(TableQuery::default()),
            Form(form(Some("1"), None)),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_fragment(response).await;
        assert_alert_error(&html, "Could not update transaction", None);
    }
}
