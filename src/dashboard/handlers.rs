//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for the dashboard page
//! - The partial that refreshes the cards and charts after a change

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error,
    category::CategoryRegistry,
    dashboard::{
        aggregation::summarize,
        cards::summary_cards_view,
        charts::{build_dashboard_charts, charts_view},
    },
    html::{HeadElement, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    pagination::PaginationConfig,
    profile::{Profile, profile_dialog},
    receipt::upload_receipt_dialog,
    table::{TableState, build_table_view, transaction_table_view},
    timezone::local_today,
    transaction::{Transaction, TransactionStore, add_expense_dialog, add_transaction_dialog},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub store: Arc<Mutex<TransactionStore>>,
    pub profile: Arc<Mutex<Profile>>,
    pub categories: Arc<CategoryRegistry>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            profile: state.profile.clone(),
            categories: state.categories.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Display the dashboard with the summary cards, charts and transaction table.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let profile = state
        .profile
        .lock()
        .inspect_err(|error| tracing::error!("Could not acquire profile lock: {error}"))
        .map_err(|_| Error::StateLockError)?
        .clone();

    let store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("Could not acquire store lock: {error}"))
        .map_err(|_| Error::StateLockError)?;

    let table_state = TableState {
        page_size: state.pagination_config.default_page_size,
        ..Default::default()
    };

    Ok(dashboard_view(
        &profile,
        store.transactions(),
        &table_state,
        &state.categories,
        local_today(),
    )
    .into_response())
}

/// The summary cards and charts as out-of-band swaps, for responses to
/// changes in the transactions or the budget.
pub fn summary_partials(
    transactions: &[Transaction],
    monthly_budget: f64,
    categories: &CategoryRegistry,
    today: Date,
) -> Markup {
    let summary = summarize(transactions, monthly_budget, categories);
    let charts = build_dashboard_charts(transactions, categories);

    html! {
        (summary_cards_view(&summary, today, true))
        (charts_view(&charts, true))
    }
}

fn dashboard_view(
    profile: &Profile,
    transactions: &[Transaction],
    table_state: &TableState,
    categories: &CategoryRegistry,
    today: Date,
) -> Markup {
    let nav_bar = NavBar::new(&profile.username).into_html();
    let summary = summarize(transactions, profile.monthly_budget, categories);
    let charts = build_dashboard_charts(transactions, categories);
    let table = build_table_view(transactions, table_state, categories);

    let content = html!(
        (nav_bar)

        main class={ "max-w-screen-xl " (PAGE_CONTAINER_STYLE) }
        {
            (summary_cards_view(&summary, today, false))

            (charts_view(&charts, false))

            section class="w-full space-y-4"
            {
                h2 class="text-xl font-bold" { "Transactions" }

                (transaction_table_view(&table, table_state, categories))
            }
        }

        (add_transaction_dialog())
        (add_expense_dialog(categories))
        (upload_receipt_dialog())
        (profile_dialog(profile))
    );

    let scripts = [HeadElement::ScriptLink(
        "/static/echarts-5.6.0.min.js".to_owned(),
    )];

    base("Dashboard", &scripts, &content)
}
