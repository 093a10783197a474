//! Payment-method management page under the profile area.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page reads `?tab=` and fetches the profile once; the result
//! is a typed `ProfileLoad` the view must match on. Saving submits the
//! pending selection once and waits for the server before the saved
//! indicator moves. Load failures are logged and shown as a banner; there is
//! no redirect and no automatic retry.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::payment_selector::{PaymentSelector, method_label};
use crate::components::profile_layout::ProfileLayout;
use crate::net::types::PaymentMethodId;
use crate::state::payment::PaymentViewState;
use crate::state::profile::{PaymentLoaderData, ProfileLoad};
use crate::util::query::{TAB_QUERY_KEY, parse_tab};

#[must_use]
pub fn payment_page_title(username: &str) -> String {
    format!("{username}'s Payment Methods")
}

/// Route loader: fetch the profile and pair it with the requested tab.
pub async fn load_payment_page(tab: u32) -> ProfileLoad {
    ProfileLoad::from_result(crate::net::api::fetch_payment_profile().await, tab)
}

#[component]
pub fn PaymentProfilePage() -> impl IntoView {
    let query = use_query_map();
    let tab = query.with_untracked(|q| parse_tab(q.get(TAB_QUERY_KEY).as_deref()));
    let load = RwSignal::new(ProfileLoad::Loading);
    let view_state = RwSignal::new(PaymentViewState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let loaded = load_payment_page(tab).await;
        match &loaded {
            ProfileLoad::Ready(data) => view_state.set(PaymentViewState::from_profile(&data.user)),
            ProfileLoad::Failed(message) => log::error!("payment profile load failed: {message}"),
            ProfileLoad::Loading => {}
        }
        load.set(loaded);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = tab;

    let on_save = Callback::new(move |()| {
        let Some(selection) = view_state.try_update(PaymentViewState::begin_save).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::change_default_payment_method(&selection).await;
            if let Err(e) = &result {
                log::warn!("default payment method change failed: {e}");
            }
            view_state.update(|s| s.finish_save(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = selection;
    });

    view! {
        <div class="profile-page">
            {move || match load.get() {
                ProfileLoad::Loading => {
                    view! { <p class="profile-page__status">"Loading payment methods..."</p> }.into_any()
                }
                ProfileLoad::Failed(message) => {
                    view! {
                        <p class="profile-page__banner" role="alert">
                            "We couldn't load your payment methods: "
                            {message}
                        </p>
                    }
                        .into_any()
                }
                ProfileLoad::Ready(data) => {
                    view! { <PaymentPanel data=data view_state=view_state on_save=on_save/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn PaymentPanel(data: PaymentLoaderData, view_state: RwSignal<PaymentViewState>, on_save: Callback<()>) -> impl IntoView {
    let PaymentLoaderData { user, tab } = data;
    let title = payment_page_title(&user.username);
    let display_name = user.display_name().to_owned();

    let selected = Signal::derive(move || view_state.get().pending);
    let saving = Signal::derive(move || view_state.get().saving);
    let on_select = Callback::new(move |id: PaymentMethodId| view_state.update(|s| s.select(id)));
    let save_disabled = move || !view_state.get().can_save();
    let saved_label = move || {
        view_state
            .get()
            .saved
            .as_ref()
            .map_or_else(|| "None".to_owned(), method_label)
    };

    view! {
        <ProfileLayout title=title display_name=display_name user=user.user tab=tab>
            <div class="profile-page__heading">
                <h2>"My Payment Methods"</h2>
                <p class="profile-page__current">"Current default: " <span>{saved_label}</span></p>
            </div>
            <PaymentSelector selected=selected on_select=on_select disabled=saving/>
            <button
                class="btn btn--primary profile-page__save"
                class:btn--disabled=save_disabled
                disabled=save_disabled
                on:click=move |_| on_save.run(())
            >
                {move || if view_state.get().saving { "Saving..." } else { "Save" }}
            </button>
            <Show when=move || !view_state.get().error.is_empty()>
                <span class="profile-page__error" role="alert">{move || view_state.get().error}</span>
            </Show>
        </ProfileLayout>
    }
}
