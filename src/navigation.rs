//! This file defines the navigation bar shown at the top of the dashboard.

use maud::{Markup, html};

use crate::{endpoints, html::BUTTON_SECONDARY_STYLE, profile::username_view};

/// The navigation bar with the app name, the user's name and the actions
/// that open the add-transaction and profile dialogs.
pub struct NavBar<'a> {
    username: &'a str,
}

impl NavBar<'_> {
    /// Get the navigation bar for the user called `username`.
    pub fn new(username: &str) -> NavBar<'_> {
        NavBar { username }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::DASHBOARD_VIEW)
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                    {
                        span
                            class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                        {
                            "Ledgerly"
                        }
                    }

                    div class="flex items-center gap-3"
                    {
                        button
                            type="button"
                            class=(BUTTON_SECONDARY_STYLE)
                            onclick="openDialog('add-transaction-dialog')"
                        {
                            "+ Add Transaction"
                        }

                        button
                            type="button"
                            class="flex items-center gap-2 px-3 py-1.5 rounded-lg
                                text-gray-900 hover:bg-gray-100 dark:text-white
                                dark:hover:bg-gray-700"
                            aria-label="Open profile"
                            onclick="openDialog('profile-dialog')"
                        {
                            span aria-hidden="true" { "👤" }
                            (username_view(self.username, false))
                        }
                    }
                }
            }
        )
    }
}
