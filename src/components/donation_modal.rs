//! Donation Modal Component
//!
//! Dialog chrome around the donation form: backdrop, close button, focus
//! trap and Escape handling. Mounted only while open, so every open starts
//! from a fresh form.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_focus_trap::use_focus_trap;

use crate::components::donation_form::DonationRequestForm;
use crate::context::use_app_context;
use crate::store::store_modal_open;

#[component]
pub fn DonationModal() -> impl IntoView {
    let ctx = use_app_context();
    let on_close = Callback::new(move |_: ()| ctx.close_donation());

    view! {
        <Show when=move || store_modal_open(&ctx.store)>
            <ModalDialog on_close=on_close />
        </Show>
    }
}

#[component]
fn ModalDialog(on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<Div>::new();
    use_focus_trap(dialog_ref, on_close);

    view! {
        <div class="modal-overlay">
            // Backdrop click behaves like Cancel
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
            <div
                class="modal-dialog"
                role="dialog"
                aria-modal="true"
                aria-label="Donation Modal"
                tabindex="-1"
                node_ref=dialog_ref
            >
                <div class="modal-header">
                    <div class="modal-title">"Clothes Donation"</div>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                <DonationRequestForm on_close=on_close />
            </div>
        </div>
    }
}
