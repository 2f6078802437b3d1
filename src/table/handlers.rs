//! The route handler that renders the transaction table fragment.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;

use crate::{
    AppState, Error,
    category::CategoryRegistry,
    endpoints,
    pagination::PaginationConfig,
    table::{
        state::{TableQuery, TableState},
        view::transaction_table_view,
        view_model::build_table_view,
    },
    transaction::TransactionStore,
};

/// The state needed to render the transaction table.
#[derive(Debug, Clone)]
pub struct TableViewState {
    pub store: Arc<Mutex<TransactionStore>>,
    pub categories: Arc<CategoryRegistry>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for TableViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            categories: state.categories.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// A route handler for the transaction table with the state in the query string.
///
/// The table is a fragment of the dashboard, so requests that do not come
/// from htmx are sent to the dashboard instead.
pub async fn get_transaction_table(
    State(state): State<TableViewState>,
    HxRequest(is_hx_request): HxRequest,
    Query(query): Query<TableQuery>,
) -> Response {
    if !is_hx_request {
        return Redirect::to(endpoints::DASHBOARD_VIEW).into_response();
    }

    let table_state = TableState::from_query(query, &state.pagination_config);

    let store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Could not acquire store lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    let view = build_table_view(store.transactions(), &table_state, &state.categories);
    tracing::debug!(
        "Showing page {} of {} with {} matching transactions",
        view.page_index.saturating_add(1),
        view.page_count,
        view.filtered_count
    );

    transaction_table_view(&view, &table_state, &state.categories).into_response()
}
