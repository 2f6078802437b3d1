//! Alert system for displaying success and error messages to users.
//!
//! Alerts replace the `#alert-container` element that [crate::html::base]
//! places on every page. Error responses are retargeted to that element by the
//! `hx-target-error` on the page body, other responses can carry an alert as an
//! out-of-band swap.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// A message shown to the user after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success { message: String, details: String },
    SuccessSimple { message: String },
    Error { message: String, details: String },
}

impl Alert {
    /// Render the alert as a replacement for `#alert-container`.
    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }

    /// Render the alert as a replacement for `#alert-container`, for
    /// combining with out-of-band content.
    pub fn into_markup(self) -> Markup {
        self.render(false)
    }

    /// Render the alert as an out-of-band swap, for responses whose main
    /// content goes elsewhere.
    pub fn into_oob_markup(self) -> Markup {
        self.render(true)
    }

    fn render(self, swap_oob: bool) -> Markup {
        let (is_error, message, details) = match self {
            Alert::Success { message, details } => (false, message, details),
            Alert::SuccessSimple { message } => (false, message, String::new()),
            Alert::Error { message, details } => (true, message, details),
        };

        let style = if is_error {
            "text-red-800 bg-red-50 border-red-300 dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
        } else {
            "text-green-800 bg-green-50 border-green-300 dark:bg-gray-800 dark:text-green-400 dark:border-green-800"
        };

        html! {
            div
                id="alert-container"
                hx-swap-oob=[swap_oob.then_some("true")]
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div
                    role="alert"
                    class={ "flex items-start justify-between gap-4 p-4 text-sm border rounded-lg " (style) }
                    data-alert-kind=(if is_error { "error" } else { "success" })
                {
                    div
                    {
                        p class="text-sm font-medium" { (message) }

                        @if !details.is_empty() {
                            p class="mt-1 text-sm opacity-80" { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        onclick="dismissAlert()"
                    {
                        "✕"
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
