//! Clothing Selection Component
//!
//! Accordion of catalog categories with per-item quantity steppers,
//! running total and summary of everything picked so far.

use leptos::prelude::*;

use crate::catalog::{Category, ItemKey, CATALOG};
use crate::components::field_hint::FieldHint;
use crate::form::DonationForm;
use crate::validation::Field;

#[component]
pub fn ClothingSelection(form: RwSignal<DonationForm>) -> impl IntoView {
    let total = move || form.with(|f| f.draft().tally.total_count());

    view! {
        <section class="form-section">
            <div class="section-head">
                <h3>"Clothing Selection"</h3>
                <div class="section-meta">
                    "Total items: "
                    <span class="strong">{total}</span>
                </div>
            </div>

            <div class="accordion">
                {CATALOG.iter().map(|category| view! {
                    <CategoryRow form=form category=category />
                }).collect_view()}
            </div>
            <FieldHint form=form field=Field::Items />

            {move || {
                let summary = form.with(|f| f.draft().tally.summary());
                (!summary.is_empty()).then(|| view! {
                    <div class="summary">
                        <div class="summary-title">"Summary"</div>
                        <ul>
                            {summary.into_iter().map(|line| view! {
                                <li>
                                    <span>{format!("{} — {}", line.category, line.label)}</span>
                                    <span class="strong">{format!("×{}", line.quantity)}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                })
            }}
        </section>
    }
}

/// One collapsible category
#[component]
fn CategoryRow(form: RwSignal<DonationForm>, category: &'static Category) -> impl IntoView {
    let id = category.id;
    let is_open = move || form.with(|f| f.expansion().is_expanded(id));

    view! {
        <div class="accordion-row">
            <button
                type="button"
                class="accordion-toggle"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| form.update(|f| f.toggle_category(id))
            >
                <span class="accordion-label">{category.label}</span>
                <span class=move || if is_open() { "chevron open" } else { "chevron" }>"▾"</span>
            </button>
            <Show when=is_open>
                <div class="accordion-body">
                    {category.items.iter()
                        .filter_map(|label| ItemKey::new(id, label))
                        .map(|item| view! { <QuantityStepper form=form item=item /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Minus / count / plus for a single item
#[component]
fn QuantityStepper(form: RwSignal<DonationForm>, item: ItemKey) -> impl IntoView {
    let quantity = move || form.with(|f| f.draft().tally.quantity(item));
    let locked = move || !form.with(|f| f.is_editing());

    view! {
        <div class="item-row">
            <div class="item-label">{item.label()}</div>
            <div
                role="spinbutton"
                class="stepper"
                tabindex="0"
                aria-label=format!("{} quantity", item.label())
                aria-valuenow=move || quantity().to_string()
                aria-valuemin="0"
            >
                <button
                    type="button"
                    class="stepper-btn minus"
                    aria-label=format!("Remove one {}", item.label())
                    aria-disabled=move || (quantity() == 0).to_string()
                    disabled=move || quantity() == 0 || locked()
                    on:click=move |_| form.update(|f| f.mutate_item(item, -1))
                >
                    "−"
                </button>
                <span class="stepper-value">{quantity}</span>
                <button
                    type="button"
                    class="stepper-btn plus"
                    aria-label=format!("Add one {}", item.label())
                    disabled=locked
                    on:click=move |_| form.update(|f| f.mutate_item(item, 1))
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
