//! Defines the core data models for transactions.

use serde::{Deserialize, Serialize};

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = u64;

// ============================================================================
// MODELS
// ============================================================================

/// An expense, i.e. an event where money was spent.
///
/// To create a new `Transaction`, use [Transaction::build] and append the
/// builder to a [crate::transaction::TransactionStore].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, unique within its store.
    pub id: TransactionId,
    /// When the transaction happened, as entered, e.g. "2025-05-01".
    ///
    /// The date is not validated and is matched as plain text when filtering.
    pub date: String,
    /// The category key, e.g. "food". Unknown keys are allowed.
    pub category: String,
    /// Who the money was paid to.
    pub vendor: String,
    /// The amount of money spent.
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: f64, date: &str, vendor: &str) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date: date.to_owned(),
            vendor: vendor.to_owned(),
            category: crate::category::DEFAULT_CATEGORY.to_owned(),
        }
    }
}

/// A transaction as it appears in seed data, where the ID may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The ID of the transaction, assigned from its position when absent.
    #[serde(default)]
    pub id: Option<TransactionId>,
    /// When the transaction happened.
    pub date: String,
    /// The category key.
    pub category: String,
    /// Who the money was paid to.
    pub vendor: String,
    /// The amount of money spent.
    pub amount: f64,
}

/// A builder for a fully specified transaction that has not been given an ID.
///
/// ```ignore
/// let builder = Transaction::build(12.5, "2025-05-01", "Cafe").category("food");
/// store.append(builder);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// The amount of money spent. See [parse_amount] for coercing form input.
    pub amount: f64,
    /// When the transaction happened.
    pub date: String,
    /// Who the money was paid to.
    pub vendor: String,
    /// The category key, "food" unless set.
    pub category: String,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Create the transaction with `id`.
    pub(crate) fn finalize(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            category: self.category,
            vendor: self.vendor,
            amount: self.amount,
        }
    }
}

/// A partial update to a transaction. Fields set to `None` are left as is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionPatch {
    /// The new date.
    pub date: Option<String>,
    /// The new category key.
    pub category: Option<String>,
    /// The new vendor.
    pub vendor: Option<String>,
    /// The new amount.
    pub amount: Option<f64>,
}

impl TransactionPatch {
    pub(crate) fn apply(self, transaction: &mut Transaction) {
        if let Some(date) = self.date {
            transaction.date = date;
        }

        if let Some(category) = self.category {
            transaction.category = category;
        }

        if let Some(vendor) = self.vendor {
            transaction.vendor = vendor;
        }

        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
    }
}

/// Parse an amount typed into a form.
///
/// Anything that is not a finite, non-negative number becomes zero, so this
/// never fails.
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => amount,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::{Transaction, TransactionPatch, parse_amount};

    #[test]
    fn parses_decimal_amount() {
        assert_eq!(parse_amount("12.34"), 12.34);
        assert_eq!(parse_amount(" 7 "), 7.0);
    }

    #[test]
    fn invalid_amount_becomes_zero() {
        assert_eq!(parse_amount("bad"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-5"), 0.0);
    }

    #[test]
    fn trailing_text_makes_amount_zero() {
        assert_eq!(parse_amount("12abc"), 0.0);
        assert_eq!(parse_amount("3.50 dollars"), 0.0);
    }

    #[test]
    fn builder_defaults_to_food() {
        let transaction = Transaction::build(1.0, "2025-01-01", "Cafe").finalize(1);

        assert_eq!(transaction.category, "food");
    }

    #[test]
    fn patch_only_changes_set_fields() {
        let mut transaction = Transaction::build(1.0, "2025-01-01", "Cafe")
            .category("work")
            .finalize(3);

        TransactionPatch {
            vendor: Some("Bakery".to_owned()),
            amount: Some(4.5),
            ..Default::default()
        }
        .apply(&mut transaction);

        assert_eq!(transaction.id, 3);
        assert_eq!(transaction.date, "2025-01-01");
        assert_eq!(transaction.category, "work");
        assert_eq!(transaction.vendor, "Bakery");
        assert_eq!(transaction.amount, 4.5);
    }
}
