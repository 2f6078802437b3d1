//! The transaction table: its UI state, the rows it shows and how it is rendered.
//!
//! Rows go through a fixed pipeline of filter, sort and paginate, see
//! [view_model::build_table_view].

mod handlers;
mod state;
mod view;
mod view_model;

pub use handlers::get_transaction_table;
pub use state::{Column, ColumnVisibility, SortDirection, SortDirective, TableQuery, TableState};
pub use view::{category_options, transaction_table_view};
pub use view_model::{
    TableRow, TableView, build_table_view, filter_transactions, sort_transactions,
};
