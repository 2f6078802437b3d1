//! Ledgerly is a personal finance dashboard.
//!
//! It shows budget summary cards, spending charts and an editable table of
//! expenses. All data is held in memory, seeded from a JSON snapshot.
//!
//! This library provides a web server that directly serves HTML pages and
//! fragments for htmx.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod category;
mod dashboard;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod pagination;
mod profile;
mod receipt;
mod routing;
mod seed;
mod table;
#[cfg(test)]
mod test_utils;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use category::{CategoryEntry, CategoryLookup, CategoryRegistry};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, LOG_REQUEST_BODY_LIMIT, logging_middleware};
pub use pagination::{PageSize, PaginationConfig};
pub use profile::Profile;
pub use receipt::{ExpenseExtractor, LoggingExtractor, Receipt};
pub use routing::build_router;
pub use seed::load_seed;
pub use table::{
    Column, ColumnVisibility, SortDirection, SortDirective, TableQuery, TableRow, TableState,
    TableView, build_table_view, filter_transactions, sort_transactions,
};
pub use transaction::{
    Transaction, TransactionBuilder, TransactionId, TransactionPatch, TransactionRecord,
    TransactionStore, parse_amount,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for ctrl+c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
