//! Loads the transactions the store starts with.

use std::{collections::HashSet, fs, path::Path};

use crate::{
    Error,
    transaction::{TransactionRecord, TransactionStore},
};

/// The demo transactions used when no seed file is given.
const DEMO_TRANSACTIONS: &str = include_str!("../data/transactions.json");

/// Read seed records from the JSON file at `path`, or the built-in demo
/// transactions if `path` is `None`.
///
/// Records without an ID take their 1-based position, so a seed that mixes
/// explicit and missing IDs can give two records the same ID.
///
/// # Errors
/// Returns [Error::InvalidSeedData] if the file cannot be read, is not a
/// JSON array of transaction records, or would give two records the same ID.
pub fn load_seed(path: Option<&Path>) -> Result<Vec<TransactionRecord>, Error> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|error| {
            Error::InvalidSeedData(format!("could not read {}: {error}", path.display()))
        })?,
        None => DEMO_TRANSACTIONS.to_owned(),
    };

    parse_seed(&text)
}

fn parse_seed(text: &str) -> Result<Vec<TransactionRecord>, Error> {
    let records: Vec<TransactionRecord> =
        serde_json::from_str(text).map_err(|error| Error::InvalidSeedData(error.to_string()))?;

    let store = TransactionStore::initialize(&records);
    let mut seen = HashSet::new();
    if let Some(duplicate) = store
        .transactions()
        .iter()
        .map(|transaction| transaction.id)
        .find(|id| !seen.insert(*id))
    {
        return Err(Error::InvalidSeedData(format!(
            "more than one transaction has the ID {duplicate}"
        )));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::{Error, transaction::TransactionStore};

    use super::{load_seed, parse_seed};

    #[test]
    fn demo_transactions_parse() {
        let records = load_seed(None).expect("demo transactions should parse");

        assert!(!records.is_empty());
        let store = TransactionStore::initialize(&records);
        assert_eq!(store.len(), records.len());
    }

    #[test]
    fn missing_ids_are_allowed() {
        let records = parse_seed(
            r#"[
                {"date": "2025-02-01", "category": "food", "vendor": "A", "amount": 10},
                {"date": "2025-03-01", "category": "work", "vendor": "B", "amount": 20}
            ]"#,
        )
        .unwrap();

        let ids: Vec<u64> = TransactionStore::initialize(&records)
            .transactions()
            .iter()
            .map(|transaction| transaction.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = parse_seed(
            r#"[
                {"date": "2025-02-01", "category": "food", "vendor": "A", "amount": 10},
                {"id": 1, "date": "2025-03-01", "category": "work", "vendor": "B", "amount": 20}
            ]"#,
        );

        assert!(matches!(
            result,
            Err(Error::InvalidSeedData(message)) if message.contains("ID 1")
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_seed("{\"date\": 1}"),
            Err(Error::InvalidSeedData(_))
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_seed(Some(Path::new("does/not/exist.json")));

        assert!(matches!(result, Err(Error::InvalidSeedData(_))));
    }
}
