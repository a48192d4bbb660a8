//! DevDonations Frontend App
//!
//! Root component: theme tokens, site state, fragment routing and the
//! page chrome around the current view.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DonateButton, DonationModal, Footer, Header, PageView};
use crate::config;
use crate::context::AppContext;
use crate::router;
use crate::store::{store_navigate, SiteState};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();

    // Theme tokens live as long as the app
    theme::install(&config.theme);
    on_cleanup(theme::uninstall);

    // State
    let store = Store::new(SiteState::new(router::current_route()));
    provide_context(store);
    provide_context(AppContext::new(config, store));

    // Follow fragment changes
    let hash_listener = window_event_listener(ev::hashchange, move |_| {
        let route = router::current_route();
        if store_navigate(&store, route) {
            log::debug!("[ROUTER] navigated to {:?}", route);
            router::scroll_to_top();
        }
    });
    on_cleanup(move || hash_listener.remove());

    view! {
        <div class="site">
            <Header />
            <main class="site-main">
                <PageView />
            </main>
            <DonateButton />
            <Footer />
            <DonationModal />
        </div>
    }
}
