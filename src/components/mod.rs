//! UI Components
//!
//! Leptos components for the site chrome, pages and donation modal.

mod header;
mod footer;
mod donate_button;
mod page_view;
mod pages;
mod donation_modal;
mod donation_form;
mod method_selector;
mod clothing_selection;
mod field_hint;

pub use header::Header;
pub use footer::Footer;
pub use donate_button::DonateButton;
pub use page_view::PageView;
pub use donation_modal::DonationModal;
