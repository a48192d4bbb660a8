//! Page View Component
//!
//! Renders the page for the current route.

use leptos::prelude::*;

use crate::components::pages::{AboutPage, ContactPage, HomePage, VolunteerPage};
use crate::router::Route;
use crate::store::{store_route, use_site_store};

#[component]
pub fn PageView() -> impl IntoView {
    let store = use_site_store();

    move || match store_route(&store) {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Volunteer => view! { <VolunteerPage /> }.into_any(),
        Route::Contact => view! { <ContactPage /> }.into_any(),
    }
}
