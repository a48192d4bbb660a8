//! Site Header Component
//!
//! Sticky brand bar with page navigation and Donate entry point.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;
use crate::store::{store_menu_open, store_route, store_toggle_menu, use_site_store, SiteStore};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();
    let brand = ctx.with_config(|c| c.brand_name.clone());
    let contact_url = ctx.with_config(|c| c.contact_url.clone());
    let mark = brand.chars().next().unwrap_or('D').to_string();

    view! {
        <header class="site-header">
            <div class="container header-row">
                <a href=Route::Home.href() class="brand">
                    <div class="brand-mark">{mark}</div>
                    <span class="brand-name">{brand}</span>
                </a>
                <nav class="site-nav">
                    <NavLinks store=store />
                </nav>
                <div class="header-actions">
                    <a href=contact_url target="_blank" rel="noreferrer" class="btn-outline small wide-only">
                        "WhatsApp"
                    </a>
                    <button class="btn-accent small" on:click=move |_| ctx.open_donation()>
                        "♥ Donate"
                    </button>
                    <button
                        class="menu-toggle"
                        aria-label="Menu"
                        aria-expanded=move || store_menu_open(&store).to_string()
                        on:click=move |_| store_toggle_menu(&store)
                    >
                        "☰"
                    </button>
                </div>
            </div>
            <Show when=move || store_menu_open(&store)>
                <nav class="mobile-nav">
                    <NavLinks store=store />
                </nav>
            </Show>
        </header>
    }
}

/// One link per route, current page highlighted
#[component]
fn NavLinks(store: SiteStore) -> impl IntoView {
    Route::ALL.into_iter().map(|route| view! {
        <a
            href=route.href()
            class=move || if store_route(&store) == route { "nav-link active" } else { "nav-link" }
        >
            {route.title()}
        </a>
    }).collect_view()
}
