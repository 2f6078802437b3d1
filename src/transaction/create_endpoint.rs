//! Defines the endpoint and dialogs for adding a new expense.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    alert::Alert,
    category::{CategoryRegistry, DEFAULT_CATEGORY},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        dialog, format_currency,
    },
    table::{TableQuery, category_options},
    timezone::local_today,
    transaction::{Transaction, parse_amount},
};

use super::state::{TransactionState, store_changed_response};

const ISO_DATE: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The form data for adding an expense.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// The amount as typed. Anything that is not a non-negative number is
    /// recorded as zero.
    #[serde(default)]
    pub amount: String,
    /// Who the money was paid to.
    #[serde(default)]
    pub vendor: String,
    /// The date of the expense, today if left blank.
    pub date: Option<String>,
    /// The category key, "food" if left blank.
    pub category: Option<String>,
    /// The encoded state of the table on the page, see [crate::table::TableState].
    #[serde(default)]
    pub table_state: String,
}

/// A route handler for adding an expense.
///
/// Responds with the re-rendered table and the updated summary cards and charts.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let query = serde_urlencoded::from_str::<TableQuery>(&form.table_state)
        .inspect_err(|error| {
            tracing::warn!("Could not parse table state {:?}: {error}", form.table_state)
        })
        .unwrap_or_default();
    let table_state = state.table_state(query);

    let date = match form.date {
        Some(date) => date.trim().to_owned(),
        None => local_today()
            .format(ISO_DATE)
            .inspect_err(|error| tracing::error!("Could not format today's date: {error}"))
            .unwrap_or_default(),
    };
    let category = form
        .category
        .map(|category| category.trim().to_lowercase())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());
    let amount = parse_amount(&form.amount);
    let vendor = form.vendor.trim();

    let monthly_budget = match state.monthly_budget() {
        Ok(budget) => budget,
        Err(error) => return error.into_alert_response(),
    };

    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Could not acquire store lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    store.append(Transaction::build(amount, &date, vendor).category(&category));
    tracing::info!(
        "Added expense: {amount} to {vendor} on {date} ({category}), {} transactions",
        store.len()
    );

    let alert = Alert::Success {
        message: "Expense added".to_owned(),
        details: format!("{} at {vendor} on {date}", format_currency(amount)),
    };

    store_changed_response(
        &store,
        &table_state,
        &state.categories,
        monthly_budget,
        alert,
    )
}

/// The dialog that lets the user choose between entering an expense by hand
/// and uploading a receipt.
pub fn add_transaction_dialog() -> Markup {
    let choice_style = "flex w-full items-center gap-3 p-4 text-left rounded-lg border
        border-gray-200 hover:bg-gray-50 dark:border-gray-700 dark:hover:bg-gray-700";

    let body = html! {
        div class="space-y-3"
        {
            button
                type="button"
                class=(choice_style)
                onclick="closeDialog('add-transaction-dialog'); openDialog('add-expense-dialog')"
            {
                span class="text-2xl" aria-hidden="true" { "✍️" }
                span
                {
                    span class="block font-medium" { "Add Expense" }
                    span class="block text-sm text-gray-500 dark:text-gray-400" { "Enter the details yourself" }
                }
            }

            button
                type="button"
                class=(choice_style)
                onclick="closeDialog('add-transaction-dialog'); openDialog('upload-receipt-dialog')"
            {
                span class="text-2xl" aria-hidden="true" { "🧾" }
                span
                {
                    span class="block font-medium" { "Upload Receipt" }
                    span class="block text-sm text-gray-500 dark:text-gray-400" { "Let us read the receipt for you" }
                }
            }
        }
    };

    dialog("add-transaction-dialog", "Add Transaction", &body)
}

/// The dialog with the form for entering an expense by hand.
pub fn add_expense_dialog(categories: &CategoryRegistry) -> Markup {
    let body = html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-include="#table-state"
            hx-target="#transaction-table"
            hx-swap="outerHTML"
            data-close-dialog="add-expense-dialog"
            class="space-y-4"
        {
            div
            {
                label for="expense-amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    id="expense-amount"
                    name="amount"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0.00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="expense-vendor" class=(FORM_LABEL_STYLE) { "Vendor" }
                input
                    id="expense-vendor"
                    name="vendor"
                    type="text"
                    placeholder="Where did you spend it?"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="expense-date" class=(FORM_LABEL_STYLE) { "Date" }
                input
                    id="expense-date"
                    name="date"
                    type="date"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="expense-category" class=(FORM_LABEL_STYLE) { "Category" }
                select id="expense-category" name="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    (category_options(categories, DEFAULT_CATEGORY))
                }
            }

            div class="flex gap-3"
            {
                button
                    type="button"
                    class=(BUTTON_SECONDARY_STYLE)
                    onclick="closeDialog('add-expense-dialog')"
                {
                    "Cancel"
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
            }
        }
    };

    dialog("add-expense-dialog", "Add Expense", &body)
}
