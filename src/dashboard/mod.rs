//! Dashboard module
//!
//! Provides the single page of the app: summary cards, spending charts and
//! the transaction table, plus the dialogs opened from it.

mod aggregation;
mod cards;
mod charts;
mod handlers;

pub use handlers::{DashboardState, get_dashboard_page, summary_partials};
