use maud::{DOCTYPE, Markup, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use unicode_segmentation::UnicodeSegmentation;

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-600 \
    dark:bg-blue-600 disabled:bg-blue-800 hover:enabled:bg-blue-700 \
    text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "px-3 py-1.5 text-sm font-medium \
    text-gray-900 bg-white rounded border border-gray-200 hover:bg-gray-100 \
    disabled:opacity-50 disabled:cursor-not-allowed dark:bg-gray-800 \
    dark:text-gray-300 dark:border-gray-600 hover:enabled:dark:bg-gray-700";

pub const BUTTON_DELETE_STYLE: &str = "w-full px-4 py-2 text-red-600 \
    hover:text-red-500 dark:text-red-500 dark:hover:text-red-400 \
    bg-transparent border border-red-600 rounded cursor-pointer";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400 sticky top-0";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Category badge style, combined with the category's colours.
pub const CATEGORY_BADGE_STYLE: &str = "inline-flex items-center gap-1 px-1.5 py-0.5 \
    text-xs font-semibold rounded border";

// Card and dialog containers
pub const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md";

pub const DIALOG_STYLE: &str = "w-full max-w-md rounded-lg p-6 bg-white \
    dark:bg-gray-800 text-gray-900 dark:text-white backdrop:bg-black/50";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col gap-4 px-4 py-4 mx-auto lg:px-6 md:gap-6 md:py-6 text-gray-900 dark:text-white";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Ledgerly" }
                link href="/static/main.css" rel="stylesheet";

                script src="/static/htmx-2.0.8-min.js" {}
                script src="/static/htmx-ext-response-targets-2.0.4.js" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }

                script src="/static/app.js" defer {}
            }

            body
                hx-ext="response-targets"
                hx-target-error="#alert-container"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// A modal `<dialog>` with a title and a close button.
///
/// Open it from a button with `onclick="openDialog('<id>')"`, see `static/app.js`.
pub fn dialog(id: &str, title: &str, body: &Markup) -> Markup {
    html! {
        dialog id=(id) class=(DIALOG_STYLE)
        {
            div class="flex items-center justify-between mb-4"
            {
                h2 class="text-lg font-semibold" { (title) }

                button
                    type="button"
                    class="text-gray-500 hover:text-gray-900 dark:hover:text-white"
                    onclick=(format!("closeDialog('{id}')"))
                {
                    span class="sr-only" { "Close" }
                    "✕"
                }
            }

            (body)
        }
    }
}

pub const CURRENCY_SYMBOL: &str = "₹";

/// Format `number` as rupees with two decimal places, e.g. "₹18.50".
pub fn format_currency(number: f64) -> String {
    static WHOLE_FMT: OnceLock<Formatter> = OnceLock::new();

    let whole_fmt = WHOLE_FMT.get_or_init(|| {
        Formatter::currency(CURRENCY_SYMBOL)
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    let cents = (number.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let fraction = (cents - whole * 100.0) as u64;
    let sign = if number < 0.0 && cents > 0.0 { "-" } else { "" };

    // Zero is hardcoded as "0", so we must specify the formatted string for zero
    let whole = if whole == 0.0 {
        format!("{CURRENCY_SYMBOL}0")
    } else {
        whole_fmt.fmt_string(whole)
    };

    format!("{sign}{whole}.{fraction:02}")
}

/// Shorten `text` to at most `max_graphemes` user-perceived characters,
/// ending with an ellipsis when anything was cut off.
pub fn truncate_text(text: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();

    if graphemes.len() <= max_graphemes {
        return text.to_owned();
    }

    let kept = max_graphemes.saturating_sub(1);
    format!("{}…", graphemes[..kept].concat())
}

#[cfg(test)]
mod tests {
    use super::{format_currency, truncate_text};

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(format_currency(18.5), "₹18.50");
        assert_eq!(format_currency(10.0), "₹10.00");
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(0.456), "₹0.46");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-3.1), "-₹3.10");
    }

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_text("Cafe", 10), "Cafe");
    }

    #[test]
    fn long_text_is_truncated_by_grapheme() {
        assert_eq!(truncate_text("Café Coffee Day", 6), "Café …");
        assert_eq!(truncate_text("🇮🇳🇮🇳🇮🇳", 2), "🇮🇳…");
    }
}
