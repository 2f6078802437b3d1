//! The user's profile: display name, email and monthly budget.
//!
//! There are no accounts. The profile only exists so the dashboard has a name
//! to greet and a budget to measure spending against.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    alert::Alert,
    category::CategoryRegistry,
    dashboard::summary_partials,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, dialog},
    timezone::local_today,
    transaction::TransactionStore,
};

/// The user's details shown in the navigation bar and profile dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// The name shown in the navigation bar.
    pub username: String,
    /// The email address shown in the profile dialog.
    pub email: String,
    /// The amount the user plans to spend each month.
    pub monthly_budget: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: "Sasquatch".to_owned(),
            email: "demo@gmail.com".to_owned(),
            monthly_budget: 1000.0,
        }
    }
}

/// The state needed to update the profile.
#[derive(Debug, Clone)]
pub struct ProfileState {
    pub store: Arc<Mutex<TransactionStore>>,
    pub profile: Arc<Mutex<Profile>>,
    pub categories: Arc<CategoryRegistry>,
}

impl FromRef<AppState> for ProfileState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            profile: state.profile.clone(),
            categories: state.categories.clone(),
        }
    }
}

/// The form for changing the username and email.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Accepted so the form can carry it, but never stored.
    #[serde(default)]
    pub password: String,
}

/// A route handler for changing the username and email.
///
/// Blank fields keep their current value. Responds with an alert and the
/// updated username for the navigation bar.
pub async fn update_credentials_endpoint(
    State(state): State<ProfileState>,
    Form(form): Form<CredentialsForm>,
) -> Response {
    let mut profile = match state.profile.lock() {
        Ok(profile) => profile,
        Err(error) => {
            tracing::error!("Could not acquire profile lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    let username = form.username.trim();
    if !username.is_empty() {
        profile.username = username.to_owned();
    }

    let email = form.email.trim();
    if !email.is_empty() {
        profile.email = email.to_owned();
    }

    tracing::info!(
        "Updated credentials: username={}, email={}, password changed: {}",
        profile.username,
        profile.email,
        !form.password.is_empty()
    );

    let alert = Alert::SuccessSimple {
        message: "Credentials updated".to_owned(),
    };

    let markup = html! {
        (alert.into_markup())
        (username_view(&profile.username, true))
    };

    markup.into_response()
}

/// The form for changing the monthly budget.
#[derive(Debug, Deserialize)]
pub struct BudgetForm {
    #[serde(default)]
    pub budget: String,
}

/// Parse a budget typed into a form.
///
/// # Errors
/// Returns [Error::InvalidBudget] unless `text` is a finite number that is
/// zero or more.
pub fn parse_budget(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    match text.parse::<f64>() {
        Ok(budget) if budget.is_finite() && budget >= 0.0 => Ok(budget),
        _ => Err(Error::InvalidBudget(text.to_owned())),
    }
}

/// A route handler for changing the monthly budget.
///
/// Responds with an alert and the summary cards recalculated for the new budget.
pub async fn update_budget_endpoint(
    State(state): State<ProfileState>,
    Form(form): Form<BudgetForm>,
) -> Response {
    let budget = match parse_budget(&form.budget) {
        Ok(budget) => budget,
        Err(error) => {
            tracing::debug!("Rejected budget update: {error}");
            return error.into_alert_response();
        }
    };

    match state.profile.lock() {
        Ok(mut profile) => profile.monthly_budget = budget,
        Err(error) => {
            tracing::error!("Could not acquire profile lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    }

    let store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Could not acquire store lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    tracing::info!("Updated monthly budget to {budget}");

    let alert = Alert::SuccessSimple {
        message: "Budget updated".to_owned(),
    };

    let markup = html! {
        (alert.into_markup())
        (summary_partials(store.transactions(), budget, &state.categories, local_today()))
    };

    markup.into_response()
}

/// The username in the navigation bar.
///
/// With `swap_oob` set it replaces the name already on the page.
pub fn username_view(username: &str, swap_oob: bool) -> Markup {
    html! {
        span
            id="nav-username"
            hx-swap-oob=[swap_oob.then_some("true")]
            class="text-sm font-medium"
        {
            (username)
        }
    }
}

/// The dialog for editing the profile.
pub fn profile_dialog(profile: &Profile) -> Markup {
    let body = html! {
        div class="space-y-6"
        {
            form
                hx-post=(endpoints::PROFILE_CREDENTIALS)
                hx-target="#alert-container"
                hx-swap="outerHTML"
                class="space-y-4"
            {
                h3 class="font-semibold" { "Update Credentials" }

                div
                {
                    label for="profile-username" class=(FORM_LABEL_STYLE) { "Username" }
                    input
                        id="profile-username"
                        name="username"
                        type="text"
                        value=(profile.username)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="profile-email" class=(FORM_LABEL_STYLE) { "Email" }
                    input
                        id="profile-email"
                        name="email"
                        type="email"
                        value=(profile.email)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="profile-password" class=(FORM_LABEL_STYLE) { "Password" }
                    input
                        id="profile-password"
                        name="password"
                        type="password"
                        autocomplete="new-password"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Credentials" }
            }

            form
                hx-post=(endpoints::PROFILE_BUDGET)
                hx-target="#alert-container"
                hx-swap="outerHTML"
                class="space-y-4"
            {
                h3 class="font-semibold" { "Monthly Budget" }

                div
                {
                    label for="profile-budget" class=(FORM_LABEL_STYLE) { "Budget" }
                    input
                        id="profile-budget"
                        name="budget"
                        type="number"
                        min="0"
                        step="0.01"
                        required
                        value=(profile.monthly_budget)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Update Budget" }
            }
        }
    };

    dialog("profile-dialog", "Profile", &body)
}
