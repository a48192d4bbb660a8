//! Static Pages
//!
//! Home, About, Volunteer and Contact views selected by the router.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;

/// Feature cards on the landing page: (title, text)
const FEATURES: &[(&str, &str)] = &[
    ("3-step pickup", "Home pickup or drop-off — your call."),
    ("Verified partners", "Trusted centers and transparent routing."),
    ("Sustainable impact", "Keep clothes in circulation longer."),
];

/// About page stat tiles: (label, value)
const STATS: &[(&str, &str)] = &[
    ("Garments Recirculated", "120K+"),
    ("Partner Centers", "48"),
    ("Avg. Pickup Time", "24–48h"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="page home">
            <div class="container hero">
                <div class="hero-copy">
                    <div class="pill">"Minimal. Humane. Impactful."</div>
                    <h1>"Give Warmth — Donate Clothes"</h1>
                    <p class="lead">
                        "An elevated, hyper-minimal platform to pass your clothes forward. \
                         Seamless scheduling, refined experience, and real impact."
                    </p>
                    <div class="hero-actions">
                        <button class="btn-accent" on:click=move |_| ctx.open_donation()>
                            "Start Donation"
                        </button>
                        <a href=Route::About.href() class="btn-outline">"Learn more"</a>
                    </div>
                </div>

                <div class="card-grid">
                    {FEATURES.iter().map(|(title, text)| view! {
                        <div class="card">
                            <span class="card-title">{*title}</span>
                            <p class="card-text">{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let ctx = use_app_context();
    let brand = ctx.with_config(|c| c.brand_name.clone());

    view! {
        <section class="page">
            <div class="container">
                <h1>"About"</h1>
                <p class="lead">
                    {format!(
                        "{} is a design-first, minimalist clothes-donation platform. \
                         We focus on accessibility, refined motion, and transparent impact.",
                        brand
                    )}
                </p>
                <div class="card-grid">
                    {STATS.iter().map(|(label, value)| view! {
                        <div class="card">
                            <div class="card-text">{*label}</div>
                            <div class="stat-value">{*value}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Sign-up form is presentational; nothing is sent
#[component]
pub fn VolunteerPage() -> impl IntoView {
    view! {
        <section class="page">
            <div class="container">
                <h1>"Volunteer"</h1>
                <p class="lead">
                    "Join our network for sorting, pickups, and community events. \
                     Sign up and we’ll reach out."
                </p>
                <form class="volunteer-form">
                    <input type="text" placeholder="Full name" />
                    <input type="email" placeholder="Email" />
                    <textarea placeholder="How would you like to help?" rows="4"></textarea>
                    <button type="button" class="btn-dark">"Sign up"</button>
                </form>
            </div>
        </section>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = use_app_context();
    let contact_url = ctx.with_config(|c| c.contact_url.clone());

    view! {
        <section class="page">
            <div class="container">
                <h1>"Contact"</h1>
                <p class="lead">"Questions? Reach us directly on WhatsApp. We reply within a day."</p>
                <a href=contact_url target="_blank" rel="noreferrer" class="btn-outline">
                    "Chat on WhatsApp"
                </a>
            </div>
        </section>
    }
}
