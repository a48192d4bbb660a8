//! Floating Donate call-to-action

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn DonateButton() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button class="donate-fab" aria-label="Donate" on:click=move |_| ctx.open_donation()>
            "Donate"
        </button>
    }
}
