//! The route paths served by the dashboard.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}',
//! use [format_endpoint].

/// The dashboard page.
pub const DASHBOARD_VIEW: &str = "/";
/// The transaction table fragment, requested by htmx whenever the table state changes.
pub const TRANSACTION_TABLE: &str = "/transactions/table";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to add an expense.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route to upload a receipt image.
pub const RECEIPTS_API: &str = "/api/receipts";
/// The route to change the username and email.
pub const PROFILE_CREDENTIALS: &str = "/api/profile/credentials";
/// The route to change the monthly budget.
pub const PROFILE_BUDGET: &str = "/api/profile/budget";

/// Replace the `{...}` parameter in `endpoint_path` with `id`.
///
/// Only the first parameter is replaced. If there is no parameter, the
/// original path is returned.
pub fn format_endpoint(endpoint_path: &str, id: u64) -> String {
    let Some((prefix, rest)) = endpoint_path.split_once('{') else {
        return endpoint_path.to_owned();
    };

    let suffix = rest.split_once('}').map_or("", |(_, suffix)| suffix);

    format!("{prefix}{id}{suffix}")
}
