//! The summary cards at the top of the dashboard.

use maud::{Markup, html};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    dashboard::aggregation::DashboardSummary,
    html::{CARD_STYLE, format_currency},
};

const LONG_DATE: &[BorrowedFormatItem] =
    format_description!("[month repr:long] [day padding:none], [year]");

/// Formats a percentage with one decimal place and a sign, avoiding "-0.0%".
fn format_percentage(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;

    if rounded == 0.0 {
        "0.0%".to_owned()
    } else {
        format!("{rounded:+.1}%")
    }
}

/// Renders the four summary cards.
///
/// `today` is shown under the monthly budget. With `swap_oob` set the cards
/// replace the ones already on the page.
pub(super) fn summary_cards_view(summary: &DashboardSummary, today: Date, swap_oob: bool) -> Markup {
    let today = today
        .format(LONG_DATE)
        .inspect_err(|error| tracing::error!("Could not format today's date: {error}"))
        .unwrap_or_default();

    let highest_category = summary
        .highest_spending_category
        .map(|label| format!("Highest spending category: {label}"))
        .unwrap_or_else(|| "No spending yet".to_owned());

    let (savings_badge, savings_icon) = match summary.savings_percentage {
        Some(percentage) if percentage < 0.0 => (format_percentage(percentage), "📉"),
        Some(percentage) => (format_percentage(percentage), "📈"),
        None => ("No budget set".to_owned(), "📊"),
    };

    html! {
        section
            id="summary-cards"
            hx-swap-oob=[swap_oob.then_some("true")]
            class="grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-4"
        {
            (card(
                "Monthly Budget",
                &format_currency(summary.monthly_budget),
                "👛",
                html! { div class="text-gray-600 dark:text-gray-400" { (today) } },
            ))

            (card(
                "Total Expenses",
                &format_currency(summary.total_expenses),
                "🪙",
                html! {
                    div class="text-gray-600 dark:text-gray-400" data-testid="highest-category"
                    {
                        (highest_category)
                    }
                },
            ))

            (card(
                "Total Savings",
                &format_currency(summary.total_savings),
                "🐷",
                html! {
                    span
                        class="inline-flex items-center gap-1 px-2 py-0.5 text-xs
                            font-medium rounded border border-gray-300 dark:border-gray-600"
                        data-testid="savings-badge"
                    {
                        (savings_icon) " " (savings_badge)
                    }
                },
            ))

            (card(
                "Total Transactions",
                &summary.transaction_count.to_string(),
                "🧾",
                html! {
                    div class="text-gray-600 dark:text-gray-400" data-testid="average-transaction"
                    {
                        "Average " (format_currency(summary.average_per_transaction)) " per transaction"
                    }
                },
            ))
        }
    }
}

fn card(description: &str, title: &str, icon: &str, footer: Markup) -> Markup {
    html! {
        div
            class={ (CARD_STYLE) " flex flex-col justify-between gap-4" }
            aria-label=(format!("{description}: {title}"))
        {
            div class="flex items-start justify-between"
            {
                div
                {
                    p class="text-sm text-gray-600 dark:text-gray-400" { (description) }
                    p class="text-2xl font-semibold tabular-nums" { (title) }
                }

                span class="text-xl" aria-hidden="true" { (icon) }
            }

            div class="text-sm" { (footer) }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{dashboard::aggregation::DashboardSummary, html::format_currency};

    use super::{format_percentage, summary_cards_view};

    fn summary() -> DashboardSummary {
        DashboardSummary {
            monthly_budget: 1000.0,
            total_expenses: 222.0,
            highest_spending_category: Some("Work"),
            total_savings: 778.0,
            savings_percentage: Some(77.8),
            transaction_count: 12,
            average_per_transaction: 18.5,
        }
    }

    fn text_of(html: &Html, selector: &str) -> String {
        let selector = Selector::parse(selector).unwrap();
        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("could not find {selector:?}"))
            .text()
            .collect::<String>()
            .trim()
            .to_owned()
    }

    #[test]
    fn formats_percentages() {
        assert_eq!(format_percentage(24.84), "+24.8%");
        assert_eq!(format_percentage(-3.0), "-3.0%");
        assert_eq!(format_percentage(-0.01), "0.0%");
    }

    #[test]
    fn renders_all_cards() {
        let markup = summary_cards_view(&summary(), date!(2025 - 05 - 15), false).into_string();
        let html = Html::parse_fragment(&markup);

        let cards = html
            .select(&Selector::parse("#summary-cards > div").unwrap())
            .count();
        assert_eq!(cards, 4);
        assert!(markup.contains("May 15, 2025"));
        assert!(markup.contains(&format_currency(1000.0)));
        assert_eq!(
            text_of(&html, "[data-testid=highest-category]"),
            "Highest spending category: Work"
        );
        assert_eq!(
            text_of(&html, "[data-testid=average-transaction]"),
            "Average ₹18.50 per transaction"
        );
        assert!(text_of(&html, "[data-testid=savings-badge]").ends_with("+77.8%"));
        assert!(!markup.contains("hx-swap-oob"));
    }

    #[test]
    fn empty_store_has_no_highest_category() {
        let summary = DashboardSummary {
            total_expenses: 0.0,
            highest_spending_category: None,
            transaction_count: 0,
            average_per_transaction: 0.0,
            ..summary()
        };

        let markup = summary_cards_view(&summary, date!(2025 - 05 - 15), true).into_string();
        let html = Html::parse_fragment(&markup);

        assert_eq!(text_of(&html, "[data-testid=highest-category]"), "No spending yet");
        assert!(markup.contains("hx-swap-oob=\"true\""));
    }
}
