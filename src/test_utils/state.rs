use crate::{
    AppState, pagination::PaginationConfig, profile::Profile, transaction::TransactionRecord,
};

pub(crate) fn record(date: &str, category: &str, vendor: &str, amount: f64) -> TransactionRecord {
    TransactionRecord {
        id: None,
        date: date.to_owned(),
        category: category.to_owned(),
        vendor: vendor.to_owned(),
        amount,
    }
}

/// App state with seven transactions across two months and the default profile.
pub(crate) fn test_state() -> AppState {
    let records = [
        record("2025-04-02", "food", "Bakery", 12.5),
        record("2025-04-10", "work", "Office Supplies Warehouse Ltd", 40.0),
        record("2025-04-18", "entertainment", "Cinema", 15.0),
        record("2025-05-01", "food", "Grocer", 30.0),
        record("2025-05-03", "work", "Cowork", 110.0),
        record("2025-05-09", "entertainment", "Concert", 27.0),
        record("2025-05-14", "gadgets", "Electronics", 8.0),
    ];

    AppState::new(&records, Profile::default(), PaginationConfig::default())
}
