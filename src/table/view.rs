//! Renders the transaction table fragment.
//!
//! The whole fragment is swapped on every interaction, and every control in
//! it links to the [TableState] it leads to.

use maud::{Markup, html};

use crate::{
    category::CategoryRegistry,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CATEGORY_BADGE_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, dialog, format_currency, truncate_text,
    },
    pagination::{PageSize, create_pagination_controls},
    table::{
        state::{Column, SortDirection, TableState},
        view_model::{TableRow, TableView},
    },
    transaction::Transaction,
};

/// The ID of the element the table replaces.
const TABLE_ID: &str = "transaction-table";

/// The ID of the hidden input holding the encoded table state.
///
/// Forms outside the table include it so their response can re-render the
/// table as the user left it.
const TABLE_STATE_INPUT_ID: &str = "table-state";

/// The name of the hidden table state input.
const TABLE_STATE_FIELD: &str = "table_state";

const VENDOR_DISPLAY_LENGTH: usize = 24;

const TABLE_TARGET: &str = "#transaction-table";

/// Render the table fragment for `view`, which was built from `state`.
pub fn transaction_table_view(
    view: &TableView,
    state: &TableState,
    categories: &CategoryRegistry,
) -> Markup {
    let controls = create_pagination_controls(view.page_index, view.page_count);
    let unfiltered = state.with_filter("");

    html! {
        div id=(TABLE_ID) class="space-y-4"
        {
            input
                type="hidden"
                id=(TABLE_STATE_INPUT_ID)
                name=(TABLE_STATE_FIELD)
                value=(state.to_query_string());

            div class="flex flex-wrap items-center justify-between gap-4"
            {
                input
                    id="table-filter"
                    type="search"
                    name="filter"
                    placeholder="Filter by date..."
                    autocomplete="off"
                    value=(state.filter)
                    hx-get=(unfiltered.to_url(endpoints::TRANSACTION_TABLE))
                    hx-trigger="input changed delay:300ms, search"
                    hx-target=(TABLE_TARGET)
                    hx-swap="outerHTML"
                    class={ "max-w-sm " (FORM_TEXT_INPUT_STYLE) };

                (column_menu(state))
            }

            div class="overflow-x-auto rounded-lg border border-gray-200 dark:border-gray-700"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            @for column in &view.visible_columns {
                                (header_cell(*column, state))
                            }
                        }
                    }

                    tbody
                    {
                        @for row in &view.rows {
                            (row_view(row, &view.visible_columns))
                        }

                        @if view.rows.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td
                                    colspan=(view.visible_columns.len())
                                    class="px-6 py-8 text-center"
                                {
                                    "No results."
                                }
                            }
                        }
                    }
                }
            }

            div class="flex flex-wrap items-center justify-between gap-4 text-sm"
            {
                div class="flex items-center gap-2"
                {
                    span { "Rows per page" }

                    @for page_size in PageSize::ALL {
                        (page_size_button(page_size, state))
                    }
                }

                nav class="flex items-center gap-2" aria-label="Pagination"
                {
                    (page_button("«", "First page", controls.first, state))
                    (page_button("‹", "Previous page", controls.previous, state))

                    span data-testid="page-label" { (controls.label()) }

                    (page_button("›", "Next page", controls.next, state))
                    (page_button("»", "Last page", controls.last, state))
                }
            }

            @for row in &view.rows {
                (transaction_dialog(row.transaction, state, categories))
            }
        }
    }
}

fn column_menu(state: &TableState) -> Markup {
    html! {
        details class="relative"
        {
            summary class={ "list-none cursor-pointer " (BUTTON_SECONDARY_STYLE) } { "Columns" }

            ul
                class="absolute right-0 z-10 mt-2 w-40 p-2 space-y-1 rounded-lg shadow-lg
                    bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700"
            {
                @for column in Column::ALL.into_iter().filter(|column| column.can_hide()) {
                    @let is_visible = state.visibility.is_visible(column);

                    li
                    {
                        button
                            type="button"
                            role="menuitemcheckbox"
                            aria-checked=(if is_visible { "true" } else { "false" })
                            hx-get=(state.with_column_toggled(column).to_url(endpoints::TRANSACTION_TABLE))
                            hx-target=(TABLE_TARGET)
                            hx-swap="outerHTML"
                            class="flex w-full items-center gap-2 px-2 py-1 rounded
                                hover:bg-gray-100 dark:hover:bg-gray-700"
                        {
                            span class="w-4" { @if is_visible { "✓" } }
                            (column.label())
                        }
                    }
                }
            }
        }
    }
}

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "↑",
        Some(SortDirection::Descending) => "↓",
        None => "↕",
    }
}

fn header_cell(column: Column, state: &TableState) -> Markup {
    let direction = state.sort_direction(column);
    let aria_sort = match direction {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    };
    let alignment = if column == Column::Amount {
        "justify-end"
    } else {
        ""
    };

    html! {
        th scope="col" class="px-6 py-3" aria-sort=(aria_sort)
        {
            button
                type="button"
                hx-get=(state.with_sort_toggled(column).to_url(endpoints::TRANSACTION_TABLE))
                hx-target=(TABLE_TARGET)
                hx-swap="outerHTML"
                class={ "flex w-full items-center gap-1 uppercase " (alignment) }
            {
                (column.label())
                span aria-hidden="true" { (sort_indicator(direction)) }
            }
        }
    }
}

fn category_badge(row: &TableRow) -> Markup {
    let entry = row.category.entry();

    html! {
        span class={ (CATEGORY_BADGE_STYLE) " " (entry.badge_style) }
        {
            span aria-hidden="true" { (entry.icon) }
            (entry.label)
        }
    }
}

fn row_view(row: &TableRow, columns: &[Column]) -> Markup {
    let transaction = row.transaction;

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            @for column in columns {
                @match column {
                    Column::Date => {
                        td class=(TABLE_CELL_STYLE)
                        {
                            button
                                type="button"
                                class="font-medium text-blue-600 hover:underline dark:text-blue-500"
                                onclick=(format!("openDialog('{}')", dialog_id(transaction)))
                            {
                                time datetime=(transaction.date) { (transaction.date) }
                            }
                        }
                    }
                    Column::Category => {
                        td class=(TABLE_CELL_STYLE) { (category_badge(row)) }
                    }
                    Column::Vendor => {
                        td class=(TABLE_CELL_STYLE) title=(transaction.vendor)
                        {
                            (truncate_text(&transaction.vendor, VENDOR_DISPLAY_LENGTH))
                        }
                    }
                    Column::Amount => {
                        td class={ (TABLE_CELL_STYLE) " text-right tabular-nums" }
                        {
                            (format_currency(transaction.amount))
                        }
                    }
                }
            }
        }
    }
}

fn page_size_button(page_size: PageSize, state: &TableState) -> Markup {
    let is_current = page_size == state.page_size;
    let style = if is_current {
        "px-2 py-1 rounded bg-blue-600 text-white"
    } else {
        "px-2 py-1 rounded hover:bg-gray-100 dark:hover:bg-gray-700"
    };

    html! {
        button
            type="button"
            aria-pressed=(if is_current { "true" } else { "false" })
            hx-get=(state.with_page_size(page_size).to_url(endpoints::TRANSACTION_TABLE))
            hx-target=(TABLE_TARGET)
            hx-swap="outerHTML"
            class=(style)
        {
            (page_size.get())
        }
    }
}

fn page_button(text: &str, label: &str, target: Option<usize>, state: &TableState) -> Markup {
    html! {
        @if let Some(page_index) = target {
            button
                type="button"
                aria-label=(label)
                hx-get=(state.with_page(page_index).to_url(endpoints::TRANSACTION_TABLE))
                hx-target=(TABLE_TARGET)
                hx-swap="outerHTML"
                class=(BUTTON_SECONDARY_STYLE)
            {
                (text)
            }
        } @else {
            button
                type="button"
                aria-label=(label)
                disabled
                class={ (BUTTON_SECONDARY_STYLE) " opacity-50 cursor-not-allowed" }
            {
                (text)
            }
        }
    }
}

fn dialog_id(transaction: &Transaction) -> String {
    format!("transaction-{}-dialog", transaction.id)
}

/// The options for a category `<select>`, with `selected` chosen.
///
/// A key the registry does not know is kept as an extra option so that saving
/// the form does not silently change it.
pub fn category_options(categories: &CategoryRegistry, selected: &str) -> Markup {
    let lookup = categories.lookup(selected);

    html! {
        @for entry in categories.entries() {
            option value=(entry.key) selected[!lookup.is_fallback() && lookup.entry().key == entry.key]
            {
                (entry.icon) " " (entry.label)
            }
        }

        @if lookup.is_fallback() {
            option value=(selected) selected
            {
                (lookup.entry().icon) " " (lookup.entry().label)
            }
        }
    }
}

/// The details of one transaction with forms to edit or delete it.
fn transaction_dialog(
    transaction: &Transaction,
    state: &TableState,
    categories: &CategoryRegistry,
) -> Markup {
    let url = format!(
        "{}?{}",
        format_endpoint(endpoints::TRANSACTION, transaction.id),
        state.to_query_string()
    );
    let id = dialog_id(transaction);
    let confirm_message = format!(
        "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
        transaction.vendor
    );

    let body = html! {
        form
            hx-put=(url)
            hx-target=(TABLE_TARGET)
            hx-swap="outerHTML"
            class="space-y-4"
        {
            div
            {
                label for={ (id) "-date" } class=(FORM_LABEL_STYLE) { "Date" }
                input
                    id={ (id) "-date" }
                    name="date"
                    type="date"
                    value=(transaction.date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for={ (id) "-category" } class=(FORM_LABEL_STYLE) { "Category" }
                select
                    id={ (id) "-category" }
                    name="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    (category_options(categories, &transaction.category))
                }
            }

            div
            {
                label for={ (id) "-vendor" } class=(FORM_LABEL_STYLE) { "Vendor" }
                input
                    id={ (id) "-vendor" }
                    name="vendor"
                    type="text"
                    value=(transaction.vendor)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for={ (id) "-amount" } class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    id={ (id) "-amount" }
                    name="amount"
                    type="number"
                    min="0"
                    step="0.01"
                    value=(transaction.amount)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Changes" }
        }

        button
            type="button"
            hx-delete=(url)
            hx-confirm=(confirm_message)
            hx-target=(TABLE_TARGET)
            hx-swap="outerHTML"
            class={ "mt-4 " (BUTTON_DELETE_STYLE) }
        {
            "Delete"
        }
    };

    dialog(&id, &format!("Transaction #{}", transaction.id), &body)
}
