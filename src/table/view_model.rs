//! Derives the rows shown in the transaction table: filter, then sort, then paginate.

use std::cmp::Ordering;

use crate::{
    category::{CategoryLookup, CategoryRegistry},
    pagination::{PageSize, page_count, page_slice},
    transaction::Transaction,
};

use super::state::{Column, SortDirection, SortDirective, TableState};

/// A transaction paired with the category presentation to render it with.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<'a> {
    /// The transaction shown in the row.
    pub transaction: &'a Transaction,
    /// How to display the transaction's category.
    pub category: CategoryLookup<'a>,
}

/// The view-model of one page of the transaction table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    /// The rows on the current page.
    pub rows: Vec<TableRow<'a>>,
    /// The 0-based index of the current page, which may be past the last page.
    pub page_index: usize,
    /// The number of pages, at least one.
    pub page_count: usize,
    /// The number of rows per page.
    pub page_size: PageSize,
    /// The number of transactions that matched the filter, across all pages.
    pub filtered_count: usize,
    /// The columns to render, in display order.
    pub visible_columns: Vec<Column>,
    /// The sort directives the rows were sorted by.
    pub sorting: Vec<SortDirective>,
}

/// Keep the transactions whose date contains `filter`, ignoring case.
///
/// An empty filter keeps everything.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &str,
) -> Vec<&'a Transaction> {
    let needle = filter.to_lowercase();

    transactions
        .iter()
        .filter(|transaction| transaction.date.to_lowercase().contains(&needle))
        .collect()
}

/// Split `text` into alternating runs of ASCII digits and other characters.
fn text_chunks(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;

    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != is_digit)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;

        Some(chunk)
    })
}

fn compare_chunks(a: &str, b: &str) -> Ordering {
    let is_number = |chunk: &str| chunk.starts_with(|c: char| c.is_ascii_digit());

    match (is_number(a), is_number(b)) {
        (true, true) => {
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
        (false, false) => a.cmp(b),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
    }
}

/// Compare text ignoring case, with runs of digits compared by value.
///
/// "apple" sorts before "Zoo" and "Shop 9" sorts before "shop 10".
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let mut a_chunks = text_chunks(&a);
    let mut b_chunks = text_chunks(&b);

    loop {
        match (a_chunks.next(), b_chunks.next()) {
            (Some(a_chunk), Some(b_chunk)) => {
                let ordering = compare_chunks(a_chunk, b_chunk);
                if ordering.is_ne() {
                    return ordering;
                }
            }
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn compare_column(a: &Transaction, b: &Transaction, column: Column) -> Ordering {
    match column {
        Column::Date => compare_text(&a.date, &b.date),
        Column::Category => compare_text(&a.category, &b.category),
        Column::Vendor => compare_text(&a.vendor, &b.vendor),
        Column::Amount => a.amount.total_cmp(&b.amount),
    }
}

/// Sort `transactions` by `sorting` in priority order.
///
/// The sort is stable: transactions that compare equal on every directive
/// keep their relative order, in either direction.
pub fn sort_transactions(transactions: &mut [&Transaction], sorting: &[SortDirective]) {
    if sorting.is_empty() {
        return;
    }

    transactions.sort_by(|a, b| {
        sorting
            .iter()
            .map(|directive| {
                let ordering = compare_column(a, b, directive.column);

                match directive.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

/// Build the table view for `state` from all `transactions` in store order.
pub fn build_table_view<'a>(
    transactions: &'a [Transaction],
    state: &TableState,
    categories: &'a CategoryRegistry,
) -> TableView<'a> {
    let mut filtered = filter_transactions(transactions, &state.filter);
    sort_transactions(&mut filtered, &state.sorting);

    let rows = page_slice(&filtered, state.page_index, state.page_size.get())
        .iter()
        .map(|&transaction| TableRow {
            transaction,
            category: categories.lookup(&transaction.category),
        })
        .collect();

    TableView {
        rows,
        page_index: state.page_index,
        page_count: page_count(filtered.len(), state.page_size.get()),
        page_size: state.page_size,
        filtered_count: filtered.len(),
        visible_columns: state.visibility.visible_columns(),
        sorting: state.sorting.clone(),
    }
}
