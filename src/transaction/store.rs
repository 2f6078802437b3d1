//! The in-memory store that owns the ordered list of transactions.

use crate::Error;

use super::models::{
    Transaction, TransactionBuilder, TransactionId, TransactionPatch, TransactionRecord,
};

/// An ordered, in-memory collection of transactions.
///
/// Insertion order is preserved and is the order the table shows before any
/// sorting is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create a store from seed records.
    ///
    /// Records without an ID are given their 1-based position as their ID.
    /// IDs are not checked for uniqueness here, [crate::load_seed]
    /// rejects seeds that would repeat one.
    /// The input is left untouched, so calling this twice with the same
    /// records produces equal stores.
    pub fn initialize(records: &[TransactionRecord]) -> Self {
        let transactions = records
            .iter()
            .enumerate()
            .map(|(index, record)| Transaction {
                id: record.id.unwrap_or(index as TransactionId + 1),
                date: record.date.clone(),
                category: record.category.clone(),
                vendor: record.vendor.clone(),
                amount: record.amount,
            })
            .collect();

        Self { transactions }
    }

    /// Add a transaction to the end of the store and return the updated sequence.
    ///
    /// The new transaction's ID is one more than the number of transactions
    /// in the store, or one more than the largest ID if a removal has left a
    /// higher ID behind.
    pub fn append(&mut self, builder: TransactionBuilder) -> &[Transaction] {
        let id = self.next_id();
        self.transactions.push(builder.finalize(id));

        &self.transactions
    }

    /// Apply `patch` to the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if there is no transaction with `id`.
    pub fn update(
        &mut self,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> Result<&Transaction, Error> {
        let transaction = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::UpdateMissingTransaction(id))?;

        patch.apply(transaction);

        Ok(transaction)
    }

    /// Remove the transaction with `id`, keeping the order of the others.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if there is no transaction with `id`.
    pub fn remove(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let position = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::DeleteMissingTransaction(id))?;

        Ok(self.transactions.remove(position))
    }

    /// Get the transaction with `id`.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn next_id(&self) -> TransactionId {
        let count = self.transactions.len() as TransactionId;
        let max_id = self
            .transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or(0);

        count.max(max_id) + 1
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        test_utils::record,
        transaction::{
            Transaction, TransactionPatch, TransactionRecord, TransactionStore, parse_amount,
        },
    };

    fn seed() -> Vec<TransactionRecord> {
        vec![
            record("2025-02-01", "food", "A", 10.0),
            record("2025-03-01", "work", "B", 20.0),
        ]
    }

    #[test]
    fn initialize_backfills_ids_in_order() {
        let records: Vec<_> = (0..7)
            .map(|i| record("2025-01-01", "food", &i.to_string(), i as f64))
            .collect();

        let store = TransactionStore::initialize(&records);

        let ids: Vec<_> = store.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
        let vendors: Vec<_> = store.transactions().iter().map(|t| t.vendor.as_str()).collect();
        assert_eq!(vendors, vec!["0", "1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn initialize_keeps_existing_ids_and_does_not_mutate_input() {
        let mut records = seed();
        records[0].id = Some(42);
        let before = records.clone();

        let first = TransactionStore::initialize(&records);
        let second = TransactionStore::initialize(&records);

        assert_eq!(records, before);
        assert_eq!(first, second);
        assert_eq!(first.transactions()[0].id, 42);
        assert_eq!(first.transactions()[1].id, 2);
    }

    #[test]
    fn append_assigns_next_id_and_keeps_prior_records() {
        let mut store = TransactionStore::initialize(&seed());
        let before = store.transactions().to_vec();

        let transactions = store.append(
            Transaction::build(parse_amount("bad"), "2025-04-01", "C").category("entertainment"),
        );

        assert_eq!(transactions.len(), 3);
        assert_eq!(&transactions[..2], before.as_slice());
        let added = &transactions[2];
        assert_eq!(added.id, 3);
        assert_eq!(added.amount, 0.0);
        assert_eq!(added.category, "entertainment");
        assert_eq!(added.vendor, "C");
    }

    #[test]
    fn append_after_remove_does_not_reuse_ids() {
        let mut store = TransactionStore::initialize(&seed());
        store.remove(1).unwrap();

        store.append(Transaction::build(5.0, "2025-04-01", "C"));

        let ids: Vec<_> = store.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn update_patches_in_place() {
        let mut store = TransactionStore::initialize(&seed());

        let updated = store
            .update(
                2,
                TransactionPatch {
                    amount: Some(99.0),
                    ..Default::default()
                },
            )
            .unwrap()
            .clone();

        assert_eq!(updated.amount, 99.0);
        assert_eq!(store.transactions()[1], updated);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_missing_transaction_fails() {
        let mut store = TransactionStore::initialize(&seed());

        let result = store.update(3, TransactionPatch::default());

        assert_eq!(result, Err(Error::UpdateMissingTransaction(3)));
    }

    #[test]
    fn remove_keeps_order_of_remaining() {
        let mut store = TransactionStore::initialize(&[
            record("2025-01-01", "food", "A", 1.0),
            record("2025-01-02", "food", "B", 2.0),
            record("2025-01-03", "food", "C", 3.0),
        ]);

        let removed = store.remove(2).unwrap();

        assert_eq!(removed.vendor, "B");
        let vendors: Vec<_> = store.transactions().iter().map(|t| t.vendor.as_str()).collect();
        assert_eq!(vendors, vec!["A", "C"]);
        assert!(store.get(2).is_none());
    }

    #[test]
    fn remove_missing_transaction_fails() {
        let mut store = TransactionStore::default();

        assert!(store.is_empty());
        assert_eq!(store.remove(1), Err(Error::DeleteMissingTransaction(1)));
    }
}
