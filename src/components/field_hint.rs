//! Inline validation hint shown under a form field

use leptos::prelude::*;

use crate::form::DonationForm;
use crate::validation::Field;

#[component]
pub fn FieldHint(form: RwSignal<DonationForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error_for(field)).map(|err| view! {
            <p class="field-error" role="alert" data-field=field.as_str()>{err.to_string()}</p>
        })
    }
}
