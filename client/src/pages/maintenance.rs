//! Placeholder shown while the storefront is under maintenance.

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;

use leptos::prelude::*;

use crate::util::nav::Navigator;

/// Where "Reload" sends the user.
pub const RELOAD_PATH: &str = "/";

pub const SUPPORT_MAILTO: &str = "mailto:support@storefront.example";

const ILLUSTRATION_URL: &str = "https://www.svgrepo.com/show/426192/cogs-settings.svg";

pub fn reload(navigator: Navigator) {
    navigator.go(RELOAD_PATH);
}

#[component]
pub fn MaintenancePage(navigator: Navigator) -> impl IntoView {
    view! {
        <div class="maintenance-page">
            <img class="maintenance-page__art" src=ILLUSTRATION_URL alt="Maintenance"/>
            <h1 class="maintenance-page__title">"Site is under maintenance"</h1>
            <p class="maintenance-page__subtitle">
                "We're working hard to improve the user experience. Stay tuned!"
            </p>
            <div class="maintenance-page__actions">
                <a class="btn btn--primary" href=SUPPORT_MAILTO>
                    "Contact Us"
                </a>
                <button class="btn btn--outline" on:click=move |_| reload(navigator)>
                    "Reload"
                </button>
            </div>
        </div>
    }
}
