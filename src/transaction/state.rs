//! The state shared by the handlers that change transactions, and the
//! response they all send back.

use std::sync::{Arc, Mutex};

use axum::{
    extract::FromRef,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error,
    alert::Alert,
    category::CategoryRegistry,
    dashboard::summary_partials,
    pagination::PaginationConfig,
    profile::Profile,
    table::{TableQuery, TableState, build_table_view, transaction_table_view},
    timezone::local_today,
};

use super::TransactionStore;

/// The state needed to add, edit or delete a transaction.
#[derive(Debug, Clone)]
pub struct TransactionState {
    pub store: Arc<Mutex<TransactionStore>>,
    pub profile: Arc<Mutex<Profile>>,
    pub categories: Arc<CategoryRegistry>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            profile: state.profile.clone(),
            categories: state.categories.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

impl TransactionState {
    /// Read the budget for the summary cards.
    ///
    /// The profile lock is released before returning, so callers can lock
    /// the store afterwards.
    pub(super) fn monthly_budget(&self) -> Result<f64, Error> {
        self.profile
            .lock()
            .map(|profile| profile.monthly_budget)
            .map_err(|error| {
                tracing::error!("Could not acquire profile lock: {error}");
                Error::StateLockError
            })
    }

    pub(super) fn table_state(&self, query: TableQuery) -> TableState {
        TableState::from_query(query, &self.pagination_config)
    }
}

/// The response to a change in the store.
///
/// The table is re-rendered in the state the user left it, and the summary
/// cards, charts and `alert` are swapped out of band so the whole dashboard
/// reflects the change.
pub(super) fn store_changed_response(
    store: &TransactionStore,
    table_state: &TableState,
    categories: &CategoryRegistry,
    monthly_budget: f64,
    alert: Alert,
) -> Response {
    let view = build_table_view(store.transactions(), table_state, categories);

    html! {
        (transaction_table_view(&view, table_state, categories))
        (summary_partials(store.transactions(), monthly_budget, categories, local_today()))
        (alert.into_oob_markup())
    }
    .into_response()
}
