//! Transaction management for the dashboard.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The in-memory `TransactionStore`
//! - Route handlers for adding, editing and deleting transactions
//! - The dialogs for adding an expense

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod models;
mod state;
mod store;

pub use create_endpoint::{
    add_expense_dialog, add_transaction_dialog, create_transaction_endpoint,
};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use models::{
    Transaction, TransactionBuilder, TransactionId, TransactionPatch, TransactionRecord,
    parse_amount,
};
pub use store::TransactionStore;
