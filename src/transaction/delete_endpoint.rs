//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use crate::{
    Error,
    alert::Alert,
    pagination::page_count,
    table::{TableQuery, filter_transactions},
    transaction::TransactionId,
};

use super::state::{TransactionState, store_changed_response};

/// A route handler for deleting a transaction.
///
/// Responds with the re-rendered table, with the page clamped if the deleted
/// transaction was the last one on it.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Query(query): Query<TableQuery>,
) -> Response {
    let mut table_state = state.table_state(query);

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

    let removed = match store.remove(transaction_id) {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };
    tracing::info!("Deleted transaction {removed:?}");

    let remaining = filter_transactions(store.transactions(), &table_state.filter).len();
    let last_page = page_count(remaining, table_state.page_size.get()) - 1;
    table_state.page_index = table_state.page_index.min(last_page);

    let alert = Alert::Success {
        message: "Transaction deleted".to_owned(),
        details: format!("Removed {} on {}", removed.vendor, removed.date),
    };

    store_changed_response(
        &store,
        &table_state,
        &state.categories,
        monthly_budget,
        alert,
    )
}
