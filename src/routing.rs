//! Application router configuration.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    not_found::get_404_not_found,
    profile::{update_budget_endpoint, update_credentials_endpoint},
    receipt::{RECEIPT_SIZE_LIMIT, upload_receipt_endpoint},
    table::get_transaction_table,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTION_TABLE, get(get_transaction_table))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::RECEIPTS_API,
            post(upload_receipt_endpoint).layer(DefaultBodyLimit::max(RECEIPT_SIZE_LIMIT)),
        )
        .route(
            endpoints::PROFILE_CREDENTIALS,
            post(update_credentials_endpoint),
        )
        .route(endpoints::PROFILE_BUDGET, post(update_budget_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
