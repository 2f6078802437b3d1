//! Chart generation and rendering for the dashboard.
//!
//! - **Expense Breakdown**: Pie chart of total spending per category
//! - **Monthly Expenditure**: Stacked bar chart of spending per month, grouped by category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! stored on its container in a `data-chart-options` attribute. `static/app.js`
//! initializes every such container on page load and after htmx swaps.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisPointer, AxisPointerType, AxisType, Color, Emphasis, EmphasisFocus, ItemStyle,
        JsFunction, Tooltip, Trigger,
    },
    series::{Pie, bar},
};
use maud::{Markup, html};

use crate::{
    category::CategoryRegistry,
    dashboard::aggregation::{
        format_month_labels, get_sorted_months, group_monthly_expenses_by_category,
        totals_by_category,
    },
    transaction::Transaction,
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Build the charts shown on the dashboard, in display order.
pub(super) fn build_dashboard_charts(
    transactions: &[Transaction],
    categories: &CategoryRegistry,
) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "expense-breakdown-chart",
            options: expense_breakdown_chart(transactions, categories).to_string(),
        },
        DashboardChart {
            id: "monthly-expenses-chart",
            options: monthly_expenses_chart(transactions, categories).to_string(),
        },
    ]
}

/// Renders the chart containers.
///
/// With `swap_oob` set, the section replaces the existing charts when it is
/// part of an htmx response to a change in the transactions.
pub(super) fn charts_view(charts: &[DashboardChart], swap_oob: bool) -> Markup {
    html!(
        section
            id="charts"
            hx-swap-oob=[swap_oob.then_some("true")]
            class="w-full mx-auto"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        data-chart-options=(chart.options)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

pub(super) fn expense_breakdown_chart(
    transactions: &[Transaction],
    categories: &CategoryRegistry,
) -> Chart {
    let totals = totals_by_category(transactions, categories);
    let colors: Vec<Color> = totals
        .iter()
        .map(|category| category.entry.chart_color.into())
        .collect();
    let data: Vec<(f64, &str)> = totals
        .iter()
        .map(|category| (category.total, category.entry.label))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Expense Breakdown")
                .subtext("Category distribution of spending")
                .left(20)
                .top("1%"),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("2%"))
        .color(colors)
        .series(
            Pie::new()
                .name("Expenses")
                .radius("60%")
                .data(data),
        )
}

pub(super) fn monthly_expenses_chart(
    transactions: &[Transaction],
    categories: &CategoryRegistry,
) -> Chart {
    let sorted_months = get_sorted_months(transactions);
    let labels = format_month_labels(&sorted_months);
    let series_data = group_monthly_expenses_by_category(transactions, categories, &sorted_months);

    let mut chart = Chart::new()
        .title(
            Title::new()
                .text("Monthly Expenditure")
                .subtext("Spending breakdown across categories")
                .left(20)
                .top("1%"),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().left(250).top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(90)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value));

    for (entry, data) in series_data {
        chart = chart.series(
            bar::Bar::new()
                .name(entry.label)
                .stack("Expenses")
                .item_style(ItemStyle::new().color(entry.chart_color))
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(data),
        );
    }

    chart
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use crate::{category::CategoryRegistry, transaction::Transaction};

    use super::{expense_breakdown_chart, monthly_expenses_chart};

    fn transactions() -> Vec<Transaction> {
        vec![
            Transaction::build(30.0, "2025-04-02", "Cafe").finalize(1),
            Transaction::build(150.0, "2025-05-10", "Cowork")
                .category("work")
                .finalize(2),
            Transaction::build(42.0, "2025-05-12", "Cinema")
                .category("entertainment")
                .finalize(3),
        ]
    }

    #[test]
    fn breakdown_uses_category_labels_and_colors() {
        let options = expense_breakdown_chart(&transactions(), &CategoryRegistry::default())
            .to_string();

        assert!(options.contains("\"Personal\""));
        assert!(options.contains("\"Food\""));
        assert!(options.contains("hsl(262, 83%, 58%)"));
        assert!(!options.contains("\"Other\""));
    }

    #[test]
    fn monthly_chart_has_one_series_per_category() {
        let options = monthly_expenses_chart(&transactions(), &CategoryRegistry::default())
            .to_string();

        assert!(options.contains("\"Apr 2025\""));
        assert!(options.contains("\"May 2025\""));
        assert_eq!(options.matches("\"Expenses\"").count(), 3);
    }
}
