//! Method Selector Component
//!
//! Pickup / drop-off choice buttons.

use leptos::prelude::*;

use crate::form::Method;

/// Method options: (value, title, blurb)
pub const METHOD_OPTIONS: &[(Method, &str, &str)] = &[
    (Method::Pickup, "Home Pickup", "We come to you."),
    (Method::Dropoff, "Drop-off at Center", "Visit a partner center."),
];

/// Toggle buttons for the fulfillment method
#[component]
pub fn MethodSelector(
    #[prop(into)] current: Signal<Method>,
    #[prop(into)] on_change: Callback<Method>,
) -> impl IntoView {
    view! {
        <div class="method-selector">
            {METHOD_OPTIONS.iter().map(|(method, title, blurb)| {
                let method = *method;
                let is_selected = move || current.get() == method;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "method-btn active" } else { "method-btn" }
                        aria-pressed=move || is_selected().to_string()
                        on:click=move |_| on_change.run(method)
                    >
                        <span class="method-title">{*title}</span>
                        <p class="method-blurb">{*blurb}</p>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
