//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, maintenance::MaintenancePage, payment::PaymentProfilePage};
use crate::util::nav::Navigator;

/// Path of the maintenance placeholder; the server redirects here in maintenance mode.
pub const MAINTENANCE_PATH: &str = "/maintenance";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=StaticSegment("maintenance")
                    view=|| view! { <MaintenancePage navigator=Navigator::from_router()/> }
                />
                <Route path=(StaticSegment("profile"), StaticSegment("payment")) view=PaymentProfilePage/>
            </Routes>
        </Router>
    }
}
