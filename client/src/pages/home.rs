//! Landing route at `/`; the catalog itself is served by the wider storefront.

use leptos::prelude::*;

use crate::util::query::with_tab;

#[component]
pub fn HomePage() -> impl IntoView {
    let payment_href = with_tab("/profile/payment", 0);

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Storefront"</h1>
            <nav class="home-page__links">
                <a class="btn btn--primary" href=payment_href>
                    "My Payment Methods"
                </a>
            </nav>
        </div>
    }
}
