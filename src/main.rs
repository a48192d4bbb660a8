#![allow(warnings)]
//! DevDonations Frontend Entry Point

mod catalog;
mod tally;
mod validation;
mod form;
mod submission;
mod config;
mod theme;
mod logging;
mod router;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("[APP] starting");
    mount_to_body(App);
}
