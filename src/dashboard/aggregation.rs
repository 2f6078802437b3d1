//! Summary statistics over the full transaction list for the cards and charts.
//!
//! These functions always see every transaction in the store. The table's
//! filter, sort and page do not affect them.

use std::collections::BTreeSet;

use time::{Date, Month, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    category::{CategoryEntry, CategoryRegistry},
    transaction::Transaction,
};

const ISO_DATE: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The numbers shown on the summary cards.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct DashboardSummary {
    pub monthly_budget: f64,
    pub total_expenses: f64,
    /// The label of the category with the most spending, if there is any spending.
    pub highest_spending_category: Option<&'static str>,
    /// The budget left over after expenses, negative when over budget.
    pub total_savings: f64,
    /// Savings as a percentage of the budget, `None` when the budget is zero.
    pub savings_percentage: Option<f64>,
    pub transaction_count: usize,
    /// Zero when there are no transactions.
    pub average_per_transaction: f64,
}

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CategoryTotal {
    pub entry: CategoryEntry,
    pub total: f64,
}

pub(super) fn summarize(
    transactions: &[Transaction],
    monthly_budget: f64,
    categories: &CategoryRegistry,
) -> DashboardSummary {
    let total_expenses: f64 = transactions.iter().map(|transaction| transaction.amount).sum();
    let transaction_count = transactions.len();

    // Ties go to the first category in registry order.
    let highest_spending_category = totals_by_category(transactions, categories)
        .into_iter()
        .filter(|category| category.total > 0.0)
        .reduce(|highest, category| {
            if category.total > highest.total {
                category
            } else {
                highest
            }
        })
        .map(|category| category.entry.label);

    let total_savings = monthly_budget - total_expenses;
    let savings_percentage =
        (monthly_budget > 0.0).then(|| total_savings / monthly_budget * 100.0);

    let average_per_transaction = if transaction_count == 0 {
        0.0
    } else {
        total_expenses / transaction_count as f64
    };

    DashboardSummary {
        monthly_budget,
        total_expenses,
        highest_spending_category,
        total_savings,
        savings_percentage,
        transaction_count,
        average_per_transaction,
    }
}

/// Sum the amounts per category, in registry order with the fallback last.
///
/// Unknown category keys are pooled under the fallback entry. Categories
/// without transactions are left out.
pub(super) fn totals_by_category(
    transactions: &[Transaction],
    categories: &CategoryRegistry,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = categories
        .entries()
        .iter()
        .chain(std::iter::once(categories.fallback()))
        .map(|entry| CategoryTotal {
            entry: *entry,
            total: 0.0,
        })
        .collect();
    let mut seen = vec![false; totals.len()];

    for transaction in transactions {
        let key = categories.lookup(&transaction.category).entry().key;

        if let Some(index) = totals.iter().position(|total| total.entry.key == key) {
            totals[index].total += transaction.amount;
            seen[index] = true;
        }
    }

    totals
        .into_iter()
        .zip(seen)
        .filter_map(|(total, seen)| seen.then_some(total))
        .collect()
}

/// The first day of the month `date` falls in, or `None` if `date` is not a
/// `YYYY-MM-DD` date.
pub(super) fn month_of(date: &str) -> Option<Date> {
    Date::parse(date.trim(), ISO_DATE)
        .ok()
        .and_then(|date| date.replace_day(1).ok())
}

/// The distinct months in `transactions` in chronological order.
///
/// Transactions with dates that are not `YYYY-MM-DD` are skipped.
pub(super) fn get_sorted_months(transactions: &[Transaction]) -> Vec<Date> {
    transactions
        .iter()
        .filter_map(|transaction| month_of(&transaction.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Format months as short labels, e.g. "Mar 2025".
pub(super) fn format_month_labels(months: &[Date]) -> Vec<String> {
    months
        .iter()
        .map(|month| {
            let name = match month.month() {
                Month::January => "Jan",
                Month::February => "Feb",
                Month::March => "Mar",
                Month::April => "Apr",
                Month::May => "May",
                Month::June => "Jun",
                Month::July => "Jul",
                Month::August => "Aug",
                Month::September => "Sep",
                Month::October => "Oct",
                Month::November => "Nov",
                Month::December => "Dec",
            };

            format!("{name} {}", month.year())
        })
        .collect()
}

/// Monthly totals per category, ready for a stacked bar chart.
///
/// Each category gets one value per month in `months`, `None` where nothing
/// was spent. Categories follow [totals_by_category] order.
pub(super) fn group_monthly_expenses_by_category(
    transactions: &[Transaction],
    categories: &CategoryRegistry,
    months: &[Date],
) -> Vec<(CategoryEntry, Vec<Option<f64>>)> {
    totals_by_category(transactions, categories)
        .into_iter()
        .map(|category| {
            let mut values = vec![None; months.len()];

            for transaction in transactions {
                if categories.lookup(&transaction.category).entry().key != category.entry.key {
                    continue;
                }

                let Some(month) = month_of(&transaction.date) else {
                    continue;
                };

                if let Ok(index) = months.binary_search(&month) {
                    *values[index].get_or_insert(0.0) += transaction.amount;
                }
            }

            (category.entry, values)
        })
        .collect()
}
