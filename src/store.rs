//! Global Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::router::Route;

/// Site-wide UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Page selected by the URL fragment
    pub route: Route,
    /// Whether the donation modal is showing
    pub modal_open: bool,
    /// Compact navigation menu (small screens)
    pub menu_open: bool,
}

impl SiteState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_route(store: &SiteStore) -> Route {
    store.route().get()
}

/// Record a route change; returns false when already there
pub fn store_navigate(store: &SiteStore, route: Route) -> bool {
    if store.route().get_untracked() == route {
        return false;
    }
    store.route().set(route);
    store.menu_open().set(false);
    true
}

pub fn store_modal_open(store: &SiteStore) -> bool {
    store.modal_open().get()
}

pub fn store_open_modal(store: &SiteStore) {
    store.menu_open().set(false);
    store.modal_open().set(true);
}

pub fn store_close_modal(store: &SiteStore) {
    store.modal_open().set(false);
}

pub fn store_menu_open(store: &SiteStore) -> bool {
    store.menu_open().get()
}

pub fn store_toggle_menu(store: &SiteStore) {
    store.menu_open().update(|open| *open = !*open);
}
