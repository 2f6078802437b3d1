//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::{
    category::CategoryRegistry,
    pagination::PaginationConfig,
    profile::Profile,
    receipt::{ExpenseExtractor, LoggingExtractor},
    transaction::{TransactionRecord, TransactionStore},
};

/// The state of the server.
///
/// All data lives in memory for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions shown on the dashboard.
    pub store: Arc<Mutex<TransactionStore>>,

    /// The user's name, email and monthly budget.
    pub profile: Arc<Mutex<Profile>>,

    /// The display metadata for transaction categories.
    pub categories: Arc<CategoryRegistry>,

    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,

    /// Receives uploaded receipts.
    pub extractor: Arc<dyn ExpenseExtractor>,
}

impl AppState {
    /// Create a new [AppState] with the transactions in `records`.
    ///
    /// Receipts are handed to a [LoggingExtractor], use [AppState::with_extractor]
    /// to change that.
    pub fn new(
        records: &[TransactionRecord],
        profile: Profile,
        pagination_config: PaginationConfig,
    ) -> Self {
        Self {
            store: Arc::new(Mutex::new(TransactionStore::initialize(records))),
            profile: Arc::new(Mutex::new(profile)),
            categories: Arc::new(CategoryRegistry::default()),
            pagination_config,
            extractor: Arc::new(LoggingExtractor),
        }
    }

    /// Replace the receiver of uploaded receipts.
    pub fn with_extractor(mut self, extractor: Arc<dyn ExpenseExtractor>) -> Self {
        self.extractor = extractor;
        self
    }
}
