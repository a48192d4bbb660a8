//! Donation Request Form Component
//!
//! Contact details, method, pickup scheduling, clothing selection and the
//! submit / success footer. Owns the `DonationForm` state for one modal
//! session; the state is dropped with the component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::clothing_selection::ClothingSelection;
use crate::components::field_hint::FieldHint;
use crate::components::method_selector::MethodSelector;
use crate::context::use_app_context;
use crate::form::{DonationForm, Method, SubmitError, TimeSlot};
use crate::submission::{self, RandomReferences, TimerClock};
use crate::validation::Field;

#[component]
pub fn DonationRequestForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(DonationForm::new());

    let locked = move || !form.with(|f| f.is_editing());
    let method = Signal::derive(move || form.with(|f| f.draft().method));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(result) = form.try_update(|f| f.submit()) else {
            return;
        };
        let ticket = match result {
            Ok(ticket) => ticket,
            Err(SubmitError::Invalid(errors)) => {
                log::debug!("[FORM] {} field(s) invalid", errors.len());
                return;
            }
            Err(SubmitError::NotEditing) => return,
        };

        let delay = ctx.with_config(|c| c.submit_delay());
        spawn_local(async move {
            let mut references = RandomReferences::from_entropy();
            submission::run_submission(ticket, &TimerClock, delay, &mut references, move |ticket, reference| {
                // A closed modal has disposed the signal
                form.try_update(|f| f.complete(ticket, reference))
                    .unwrap_or(false)
            })
            .await;
        });
    };

    view! {
        <form class="donation-form" novalidate on:submit=on_submit>
            <div class="form-body">
                // Your Information
                <section class="form-section">
                    <h3>"Your Information"</h3>
                    <div class="field-stack">
                        <div class="field">
                            <input
                                type="text"
                                aria-label="Full Name"
                                placeholder="Full name"
                                required
                                prop:value=move || form.with(|f| f.draft().name.clone())
                                on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                                disabled=locked
                            />
                            <FieldHint form=form field=Field::Name />
                        </div>
                        <div class="field">
                            <input
                                type="tel"
                                aria-label="WhatsApp Number"
                                placeholder="WhatsApp (e.g. +14155552671)"
                                required
                                prop:value=move || form.with(|f| f.draft().phone.clone())
                                on:input=move |ev| form.update(|f| f.set_phone(event_target_value(&ev)))
                                disabled=locked
                            />
                            <p class="field-help">"Use international format with +country code."</p>
                            <FieldHint form=form field=Field::Phone />
                        </div>
                    </div>
                </section>

                // Donation Method
                <section class="form-section">
                    <h3>"Donation Method"</h3>
                    <MethodSelector
                        current=method
                        on_change=move |m: Method| form.update(|f| f.set_method(m))
                    />
                </section>

                // Pickup Details
                <section class="form-section">
                    <h3>"Pickup Details"</h3>
                    <Show
                        when=move || method.get() == Method::Pickup
                        fallback=move || view! {
                            <div class="dropoff-notice">
                                {ctx.with_config(|c| c.dropoff_notice.clone())}
                            </div>
                        }
                    >
                        <PickupFields form=form />
                    </Show>
                </section>

                <ClothingSelection form=form />

                // Review & Submit
                <section class="form-section">
                    <h3>"Review & Submit"</h3>
                    <p class="field-help">"Please review your details. You can edit above before submitting."</p>
                    {move || {
                        let count = form.with(|f| f.errors().len());
                        (count > 0).then(|| view! {
                            <div class="form-banner" role="alert">
                                {format!("Please fix {} field(s) above before submitting.", count)}
                            </div>
                        })
                    }}
                </section>
            </div>

            <FormFooter form=form on_close=on_close />
        </form>
    }
}

/// Address, date, time slot and notes (pickup only)
#[component]
fn PickupFields(form: RwSignal<DonationForm>) -> impl IntoView {
    let locked = move || !form.with(|f| f.is_editing());
    let date_value = move || {
        form.with(|f| {
            f.draft()
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="field-stack">
            <div class="field">
                <input
                    type="text"
                    aria-label="Address"
                    placeholder="Address"
                    required
                    prop:value=move || form.with(|f| f.draft().address.clone())
                    on:input=move |ev| form.update(|f| f.set_address(event_target_value(&ev)))
                    disabled=locked
                />
                <FieldHint form=form field=Field::Address />
            </div>
            <div class="field-pair">
                <div class="field">
                    <input
                        type="date"
                        aria-label="Preferred Date"
                        required
                        prop:value=date_value
                        on:input=move |ev| form.update(|f| f.set_date_input(&event_target_value(&ev)))
                        disabled=locked
                    />
                    <FieldHint form=form field=Field::Date />
                </div>
                <div class="field">
                    <select
                        aria-label="Time Slot"
                        on:change=move |ev| {
                            if let Some(slot) = TimeSlot::from_str(&event_target_value(&ev)) {
                                form.update(|f| f.set_slot(slot));
                            }
                        }
                        disabled=locked
                    >
                        {TimeSlot::ALL.into_iter().map(|slot| view! {
                            <option
                                value=slot.as_str()
                                selected=move || form.with(|f| f.draft().slot == slot)
                            >
                                {slot.as_str()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <textarea
                aria-label="Notes"
                rows="3"
                placeholder="Notes (optional)"
                prop:value=move || form.with(|f| f.draft().notes.clone())
                on:input=move |ev| form.update(|f| f.set_notes(event_target_value(&ev)))
                disabled=locked
            ></textarea>
        </div>
    }
}

/// Cancel / Submit while editing, reference + share link once done
#[component]
fn FormFooter(form: RwSignal<DonationForm>, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let share_base = ctx.with_config(|c| c.share_base_url.clone());
    let submitting = move || form.with(|f| f.is_submitting());
    // Invalidate any in-flight completion before the modal unmounts
    let close = move || {
        form.update(|f| f.reset());
        on_close.run(());
    };

    view! {
        <div class="form-footer">
            {move || match form.with(|f| f.reference().cloned()) {
                Some(reference) => {
                    let total = form.with_untracked(|f| f.draft().tally.total_count());
                    let link = submission::share_link(&share_base, &reference, total);
                    view! {
                        <div class="success-row">
                            <div class="success-text">
                                "Success! Reference "
                                <span class="strong">{reference.to_string()}</span>
                            </div>
                            <div class="success-actions">
                                <a href=link target="_blank" rel="noreferrer" class="btn-outline">
                                    "Share on WhatsApp"
                                </a>
                                <button type="button" class="btn-dark" on:click=move |_| close()>
                                    "Close"
                                </button>
                            </div>
                        </div>
                    }.into_any()
                }
                None => view! {
                    <button type="button" class="btn-outline" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-accent" disabled=submitting>
                        {move || if submitting() { "Submitting…" } else { "Submit" }}
                    </button>
                }.into_any(),
            }}
        </div>
    }
}
