//! Site Footer Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let brand = ctx.with_config(|c| c.brand_name.clone());
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="container footer-row">
                <p>{format!("© {} {}. All rights reserved.", year, brand)}</p>
                <div class="footer-links">
                    {[Route::About, Route::Volunteer, Route::Contact].into_iter().map(|route| view! {
                        <a href=route.href()>{route.title()}</a>
                    }).collect_view()}
                </div>
            </div>
        </footer>
    }
}
