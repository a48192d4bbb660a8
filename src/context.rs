//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::store::{store_close_modal, store_open_modal, SiteStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Site settings, fixed after startup
    config: StoredValue<SiteConfig>,
    /// Site UI state
    pub store: SiteStore,
}

impl AppContext {
    pub fn new(config: SiteConfig, store: SiteStore) -> Self {
        Self {
            config: StoredValue::new(config),
            store,
        }
    }

    /// Read a value out of the site config
    pub fn with_config<T>(&self, f: impl FnOnce(&SiteConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Open the donation modal (every Donate button lands here)
    pub fn open_donation(&self) {
        log::debug!("[APP] opening donation modal");
        store_open_modal(&self.store);
    }

    /// Close the donation modal, discarding its draft
    pub fn close_donation(&self) {
        log::debug!("[APP] closing donation modal");
        store_close_modal(&self.store);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
