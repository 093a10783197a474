//! Radio-group selector over the storefront's accepted payment methods.
//!
//! DESIGN
//! ======
//! The selector only reports choices through `on_select`; it never owns the
//! selection. A saved identifier outside the catalog is still shown so the
//! user can see what the account currently uses.

#[cfg(test)]
#[path = "payment_selector_test.rs"]
mod payment_selector_test;

use leptos::prelude::*;

use crate::net::types::PaymentMethodId;

/// One selectable payment method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentMethodOption {
    pub id: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

/// Methods the storefront accepts, in display order.
pub const PAYMENT_METHODS: &[PaymentMethodOption] = &[
    PaymentMethodOption { id: "paypal", label: "PayPal", hint: "Pay with your PayPal balance or linked card" },
    PaymentMethodOption {
        id: "credit_card",
        label: "Credit / Debit Card",
        hint: "Visa, Mastercard, American Express",
    },
];

/// Catalog entry for `id`, if the storefront knows it.
#[must_use]
pub fn find_option(id: &PaymentMethodId) -> Option<&'static PaymentMethodOption> {
    PAYMENT_METHODS.iter().find(|option| option.id == id.as_str())
}

/// Human label for `id`; unknown identifiers are shown as-is.
#[must_use]
pub fn method_label(id: &PaymentMethodId) -> String {
    find_option(id).map_or_else(|| id.to_string(), |option| option.label.to_owned())
}

#[component]
pub fn PaymentSelector(
    #[prop(into)] selected: Signal<Option<PaymentMethodId>>,
    on_select: Callback<PaymentMethodId>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let unlisted = move || selected.get().filter(|id| find_option(id).is_none());

    view! {
        <fieldset class="payment-selector" prop:disabled=move || disabled.get()>
            <legend class="payment-selector__legend">"Choose your default payment method"</legend>
            {PAYMENT_METHODS
                .iter()
                .map(|option| {
                    let id = PaymentMethodId::from(option.id);
                    let is_selected = {
                        let id = id.clone();
                        move || selected.get().as_ref() == Some(&id)
                    };
                    view! {
                        <label
                            class="payment-selector__option"
                            class:payment-selector__option--active=is_selected.clone()
                        >
                            <input
                                type="radio"
                                name="payment-method"
                                value=option.id
                                prop:checked=is_selected.clone()
                                on:change=move |_| on_select.run(id.clone())
                            />
                            <span class="payment-selector__label">{option.label}</span>
                            <span class="payment-selector__hint">{option.hint}</span>
                        </label>
                    }
                })
                .collect_view()}
            <Show when=move || unlisted().is_some()>
                <p class="payment-selector__unlisted">
                    "Current method: "
                    <span>{move || unlisted().map(|id| id.to_string()).unwrap_or_default()}</span>
                </p>
            </Show>
        </fieldset>
    }
}
